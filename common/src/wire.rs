//! レシピAPIのワイヤ形式（snake_case）
//!
//! レスポンスは `{ status, data: { recipe } }` または
//! `{ status, results, data: { recipes: [...] } }` の封筒に包まれる。

use crate::types::Ingredient;
use serde::{Deserialize, Serialize};

/// APIレスポンスの封筒
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    /// 検索ヒット件数（使わない）
    #[serde(default)]
    pub results: Option<u64>,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeData {
    pub recipe: RawRecipe,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipesData {
    pub recipes: Vec<RawSearchItem>,
}

/// APIが返すレシピ
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<RawIngredient>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIngredient {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// 検索結果の1件
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// レシピ投稿（POST）のリクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipePayload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}
