//! レシピ投稿フォームのパーサー
//!
//! フォームはフラットなキー/値の並び。材料は `ingredient` で始まるキーに
//! `分量,単位,説明` の形式で入力される（例: `ingredient-1 = "0.5,kg,Rice"`）。

use crate::error::{Error, Result};
use crate::types::Ingredient;
use crate::wire::NewRecipePayload;

/// 材料フィールドのキー接頭辞
pub const INGREDIENT_PREFIX: &str = "ingredient";

const INGREDIENT_FORMAT_HINT: &str =
    "Wrong ingredient format! Please use the format 'Quantity,Unit,Description'";

/// 入力順を保つフォームフィールド
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドを追加（同じキーは上書き、位置は最初のまま）
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `key=value` 形式の文字列からフィールドを追加
    pub fn insert_pair(&mut self, pair: &str) -> Result<()> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::Validation(format!("key=value 形式ではありません: {}", pair)))?;
        self.insert(key.trim(), value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// `分量,単位,説明` を材料にパース
///
/// 各要素の前後の空白は除去する。分量が空なら None。
/// 要素内部の空白はそのまま残す（"all purpose flour" は1つの説明）。
///
/// # Examples
/// ```
/// use forkify_common::parse_ingredient;
///
/// let ing = parse_ingredient("1, kg, flour").unwrap();
/// assert_eq!(ing.quantity, Some(1.0));
/// assert_eq!(ing.unit, "kg");
/// assert_eq!(ing.description, "flour");
///
/// assert!(parse_ingredient("kg,flour").is_err());
/// ```
pub fn parse_ingredient(text: &str) -> Result<Ingredient> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(Error::Validation(format!(
            "{} (got {} fields in '{}')",
            INGREDIENT_FORMAT_HINT,
            parts.len(),
            text
        )));
    };

    if description.is_empty() {
        return Err(Error::Validation(format!(
            "{} (missing description in '{}')",
            INGREDIENT_FORMAT_HINT, text
        )));
    }

    let quantity = if quantity.is_empty() {
        None
    } else {
        let q: f64 = quantity
            .parse()
            .map_err(|_| Error::Validation(format!("分量が数値ではありません: {}", quantity)))?;
        if !(q.is_finite() && q > 0.0) {
            return Err(Error::Validation(format!("分量は正の数で入力してください: {}", quantity)));
        }
        Some(q)
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}

/// フォームの材料フィールドをすべてパース（1件でも不正なら全体がエラー）
pub fn parse_ingredients(fields: &FormFields) -> Result<Vec<Ingredient>> {
    fields
        .iter()
        .filter(|(key, value)| key.starts_with(INGREDIENT_PREFIX) && !value.is_empty())
        .map(|(_, value)| parse_ingredient(value))
        .collect()
}

/// フォームから投稿用のリクエストボディを組み立てる
///
/// # Returns
/// * `Err(Error::Validation)` - 材料の形式不正、title 欠落、数値フィールド不正
pub fn build_upload_payload(fields: &FormFields) -> Result<NewRecipePayload> {
    let ingredients = parse_ingredients(fields)?;

    let title = fields.get("title").map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(Error::Validation("title は必須です".into()));
    }

    let servings = parse_integer_field(fields, "servings")?;
    if servings == 0 {
        return Err(Error::Validation("servings は1以上で入力してください".into()));
    }
    let cooking_time = parse_integer_field(fields, "cookingTime")?;

    Ok(NewRecipePayload {
        title: title.to_string(),
        source_url: text_field(fields, "sourceUrl"),
        image_url: text_field(fields, "image"),
        publisher: text_field(fields, "publisher"),
        cooking_time,
        servings,
        ingredients,
    })
}

fn text_field(fields: &FormFields, key: &str) -> String {
    fields.get(key).map(str::trim).unwrap_or_default().to_string()
}

fn parse_integer_field(fields: &FormFields, key: &str) -> Result<u32> {
    let raw = fields
        .get(key)
        .map(str::trim)
        .ok_or_else(|| Error::Validation(format!("{} は必須です", key)))?;
    raw.parse()
        .map_err(|_| Error::Validation(format!("{} は0以上の整数で入力してください: {}", key, raw)))
}
