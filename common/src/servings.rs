//! サービング数に応じた分量の再計算

use crate::types::Ingredient;

/// 材料の分量を `new_servings / old_servings` 倍する
///
/// 現在の分量と現在のサービング数から計算する（元の値は保持しない）。
/// 分量が None の材料はそのまま。
pub fn scale_ingredients(ingredients: &mut [Ingredient], old_servings: u32, new_servings: u32) {
    if old_servings == 0 {
        return;
    }
    let old = f64::from(old_servings);
    let new = f64::from(new_servings);
    for ing in ingredients.iter_mut() {
        if let Some(q) = ing.quantity.as_mut() {
            *q = *q * new / old;
        }
    }
}
