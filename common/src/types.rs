//! レシピの型定義
//!
//! CLIと将来のWeb(WASM)フロントエンドで共有される正規化済みの型:
//! - Recipe: 表示中のレシピ、ブックマークの保存形式でもある
//! - Ingredient: 材料（分量はサービング数に比例）
//! - SearchResultItem: 検索結果一覧用の軽量な射影

use serde::{Deserialize, Serialize};

/// 材料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 分量（「塩 少々」のように分量がない場合は None）
    pub quantity: Option<f64>,
    /// 単位（空文字あり）
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// レシピ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    /// 常に1以上
    pub servings: u32,
    /// 調理時間（分）
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,

    /// ブックマーク済みか（APIとはやり取りしない派生値）
    #[serde(default)]
    pub bookmarked: bool,

    /// ユーザー投稿レシピのみ持つAPIキー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Recipe {
    /// ユーザー投稿レシピか
    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }

    /// 一覧表示用の射影（ブックマーク一覧に使う）
    pub fn to_search_item(&self) -> SearchResultItem {
        SearchResultItem {
            id: self.id.clone(),
            title: self.title.clone(),
            image: self.image.clone(),
            publisher: self.publisher.clone(),
            key: self.key.clone(),
        }
    }
}

/// 検索結果の1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "5ed6604591c37cdc054bc886".to_string(),
            title: "Spicy Chicken and Pepper Jack Pizza".to_string(),
            publisher: "My Baking Addiction".to_string(),
            source_url: "http://www.mybakingaddiction.com/spicy-chicken".to_string(),
            image: "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg".to_string(),
            servings: 4,
            cooking_time: 45,
            ingredients: vec![Ingredient {
                quantity: Some(1.0),
                unit: "".to_string(),
                description: "tbsp. Olive oil".to_string(),
            }],
            bookmarked: false,
            key: None,
        }
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert!(json.get("sourceUrl").is_some());
        assert!(json.get("cookingTime").is_some());
        assert!(json.get("source_url").is_none());
    }

    #[test]
    fn test_recipe_without_key_has_no_key_field() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert!(json.get("key").is_none());
    }

    #[test]
    fn test_recipe_with_key_keeps_key_field() {
        let mut recipe = sample_recipe();
        recipe.key = Some("abc".to_string());
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["key"], "abc");
        assert!(recipe.is_user_generated());
    }

    #[test]
    fn test_bookmarked_defaults_to_false() {
        let mut json = serde_json::to_value(sample_recipe()).unwrap();
        json.as_object_mut().unwrap().remove("bookmarked");
        let recipe: Recipe = serde_json::from_value(json).unwrap();
        assert!(!recipe.bookmarked);
    }

    #[test]
    fn test_to_search_item() {
        let item = sample_recipe().to_search_item();
        assert_eq!(item.id, "5ed6604591c37cdc054bc886");
        assert_eq!(item.publisher, "My Baking Addiction");
        assert!(item.key.is_none());
    }
}
