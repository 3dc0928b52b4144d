//! レシピ投稿フォームの対話入力

use crate::error::{ForkifyError, Result};
use dialoguer::Input;
use forkify_common::FormFields;

/// 投稿フォームの項目（キー, 表示名）。材料は6件まで
pub const FORM_FIELDS: [(&str, &str); 12] = [
    ("title", "タイトル"),
    ("sourceUrl", "URL"),
    ("image", "画像URL"),
    ("publisher", "発行元"),
    ("cookingTime", "調理時間（分）"),
    ("servings", "人数"),
    ("ingredient-1", "材料1（分量,単位,説明）"),
    ("ingredient-2", "材料2（分量,単位,説明）"),
    ("ingredient-3", "材料3（分量,単位,説明）"),
    ("ingredient-4", "材料4（分量,単位,説明）"),
    ("ingredient-5", "材料5（分量,単位,説明）"),
    ("ingredient-6", "材料6（分量,単位,説明）"),
];

/// `key=value` の並びからフォームを作る
pub fn fields_from_pairs(pairs: &[String]) -> Result<FormFields> {
    let mut fields = FormFields::new();
    for pair in pairs {
        fields.insert_pair(pair)?;
    }
    Ok(fields)
}

/// まだ入力されていない項目を対話入力する
pub fn prompt_missing_fields(fields: &mut FormFields) -> Result<()> {
    for (key, label) in FORM_FIELDS {
        if fields.get(key).is_some() {
            continue;
        }
        let value: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ForkifyError::Prompt(e.to_string()))?;
        fields.insert(key, value);
    }
    Ok(())
}
