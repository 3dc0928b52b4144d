//! レシピ正規化モジュール
//!
//! APIのワイヤ形式を正規化済みの `Recipe` / `SearchResultItem` に変換する。
//! I/Oは行わない。`bookmarked` は呼び出し側が設定する。

use crate::error::{Error, Result};
use crate::types::{Ingredient, Recipe, SearchResultItem};
use crate::wire::{ApiEnvelope, RawRecipe, RawSearchItem, RecipeData, RecipesData};
use serde_json::Value;

/// APIのレシピを正規化
///
/// # Returns
/// * `Err(Error::Parse)` - servings が0、または分量が正でない材料を含む場合
pub fn normalize_recipe(raw: RawRecipe) -> Result<Recipe> {
    if raw.servings == 0 {
        return Err(Error::Parse(format!("servings が0です: {}", raw.id)));
    }

    let ingredients = raw
        .ingredients
        .into_iter()
        .map(|ing| {
            if let Some(q) = ing.quantity {
                if !(q.is_finite() && q > 0.0) {
                    return Err(Error::Parse(format!(
                        "材料の分量が不正です: {} ({})",
                        ing.description, q
                    )));
                }
            }
            Ok(Ingredient {
                quantity: ing.quantity,
                unit: ing.unit,
                description: ing.description,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Recipe {
        id: raw.id,
        title: raw.title,
        publisher: raw.publisher,
        source_url: raw.source_url,
        image: raw.image_url,
        servings: raw.servings,
        cooking_time: raw.cooking_time,
        ingredients,
        bookmarked: false,
        key: raw.key,
    })
}

/// 検索結果の1件を正規化
pub fn normalize_search_item(raw: RawSearchItem) -> SearchResultItem {
    SearchResultItem {
        id: raw.id,
        title: raw.title,
        image: raw.image_url,
        publisher: raw.publisher,
        key: raw.key,
    }
}

/// `{ data: { recipe } }` レスポンスをパースして正規化
///
/// # Examples
/// ```
/// use forkify_common::parse_recipe_response;
///
/// let json = serde_json::json!({
///     "status": "success",
///     "data": { "recipe": {
///         "id": "abc", "title": "Pizza", "publisher": "Me",
///         "source_url": "http://example.com", "image_url": "http://example.com/p.jpg",
///         "servings": 2, "cooking_time": 30,
///         "ingredients": [{ "quantity": null, "unit": "", "description": "salt" }]
///     }}
/// });
/// let recipe = parse_recipe_response(json).unwrap();
/// assert_eq!(recipe.image, "http://example.com/p.jpg");
/// ```
pub fn parse_recipe_response(value: Value) -> Result<Recipe> {
    let envelope: ApiEnvelope<RecipeData> = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("レシピレスポンスのパースエラー: {}", e)))?;
    normalize_recipe(envelope.data.recipe)
}

/// `{ data: { recipes: [...] } }` レスポンスをパースして正規化
///
/// サーバーの並び順をそのまま保つ。
pub fn parse_search_response(value: Value) -> Result<Vec<SearchResultItem>> {
    let envelope: ApiEnvelope<RecipesData> = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("検索レスポンスのパースエラー: {}", e)))?;
    Ok(envelope
        .data
        .recipes
        .into_iter()
        .map(normalize_search_item)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe_json() -> Value {
        json!({
            "status": "success",
            "data": {
                "recipe": {
                    "id": "5ed6604591c37cdc054bc886",
                    "title": "Spicy Chicken and Pepper Jack Pizza",
                    "publisher": "My Baking Addiction",
                    "source_url": "http://www.mybakingaddiction.com/spicy-chicken",
                    "image_url": "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg",
                    "servings": 4,
                    "cooking_time": 45,
                    "ingredients": [
                        { "quantity": 1, "unit": "", "description": "tbsp. Olive oil" },
                        { "quantity": 0.5, "unit": "cup", "description": "Sliced onions" },
                        { "quantity": null, "unit": "", "description": "Salt" }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_parse_recipe_maps_wire_fields() {
        let recipe = parse_recipe_response(recipe_json()).unwrap();
        assert_eq!(recipe.id, "5ed6604591c37cdc054bc886");
        assert_eq!(recipe.source_url, "http://www.mybakingaddiction.com/spicy-chicken");
        assert_eq!(
            recipe.image,
            "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg"
        );
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.cooking_time, 45);
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[1].quantity, Some(0.5));
        assert_eq!(recipe.ingredients[2].quantity, None);
        assert!(!recipe.bookmarked);
    }

    #[test]
    fn test_parse_recipe_without_key() {
        let recipe = parse_recipe_response(recipe_json()).unwrap();
        assert!(recipe.key.is_none());
    }

    #[test]
    fn test_parse_recipe_with_key() {
        let mut value = recipe_json();
        value["data"]["recipe"]["key"] = json!("user-key");
        let recipe = parse_recipe_response(value).unwrap();
        assert_eq!(recipe.key.as_deref(), Some("user-key"));
    }

    #[test]
    fn test_parse_recipe_missing_field() {
        let mut value = recipe_json();
        value["data"]["recipe"]
            .as_object_mut()
            .unwrap()
            .remove("source_url");
        let err = parse_recipe_response(value).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_recipe_zero_servings() {
        let mut value = recipe_json();
        value["data"]["recipe"]["servings"] = json!(0);
        assert!(matches!(parse_recipe_response(value), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_recipe_negative_quantity() {
        let mut value = recipe_json();
        value["data"]["recipe"]["ingredients"][0]["quantity"] = json!(-1);
        assert!(matches!(parse_recipe_response(value), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_recipe_wrong_envelope() {
        let value = json!({ "status": "fail", "message": "Invalid _id" });
        assert!(matches!(parse_recipe_response(value), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_search_response_preserves_order() {
        let value = json!({
            "status": "success",
            "results": 2,
            "data": {
                "recipes": [
                    { "id": "2", "title": "Pizza B", "publisher": "P", "image_url": "b.jpg" },
                    { "id": "1", "title": "Pizza A", "publisher": "P", "image_url": "a.jpg", "key": "k" }
                ]
            }
        });
        let items = parse_search_response(value).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "2");
        assert_eq!(items[0].image, "b.jpg");
        assert!(items[0].key.is_none());
        assert_eq!(items[1].key.as_deref(), Some("k"));
    }

    #[test]
    fn test_parse_search_response_empty() {
        let value = json!({ "status": "success", "results": 0, "data": { "recipes": [] } });
        assert!(parse_search_response(value).unwrap().is_empty());
    }
}
