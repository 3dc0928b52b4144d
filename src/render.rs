//! 端末向けのテキスト表示

use forkify_common::{Ingredient, Recipe, SearchResultItem};
use std::fmt::Write;

/// 分量を読みやすい分数表記にする（例: 1.5 → "1 1/2"）
pub fn format_quantity(quantity: f64) -> String {
    const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];
    const TOLERANCE: f64 = 1e-3;

    let whole = quantity.trunc();
    let frac = quantity - whole;

    if frac.abs() < TOLERANCE {
        return format!("{}", whole as i64);
    }
    if 1.0 - frac < TOLERANCE {
        return format!("{}", whole as i64 + 1);
    }

    for den in DENOMINATORS {
        let num = (frac * f64::from(den)).round();
        if num >= 1.0 && (num / f64::from(den) - frac).abs() < TOLERANCE {
            let fraction = format!("{}/{}", num as u32, den);
            return if whole == 0.0 {
                fraction
            } else {
                format!("{} {}", whole as i64, fraction)
            };
        }
    }

    let text = format!("{:.2}", quantity);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_ingredient(ing: &Ingredient) -> String {
    let mut parts = Vec::new();
    if let Some(q) = ing.quantity {
        parts.push(format_quantity(q));
    }
    if !ing.unit.is_empty() {
        parts.push(ing.unit.clone());
    }
    parts.push(ing.description.clone());
    parts.join(" ")
}

pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let mark = if recipe.bookmarked { "★" } else { "☆" };
    let _ = writeln!(out, "{} {}", mark, recipe.title);
    let _ = writeln!(out, "  ID: {}", recipe.id);
    let _ = writeln!(out, "  調理時間: {}分 / {}人分", recipe.cooking_time, recipe.servings);
    if recipe.is_user_generated() {
        let _ = writeln!(out, "  (ユーザー投稿)");
    }
    let _ = writeln!(out, "\n材料:");
    for ing in &recipe.ingredients {
        let _ = writeln!(out, "  ✓ {}", format_ingredient(ing));
    }
    let _ = writeln!(out, "\n出典: {} ({})", recipe.publisher, recipe.source_url);
    out
}

/// 検索結果一覧（ユーザー投稿には 👤 を付ける）
pub fn format_results(items: &[SearchResultItem]) -> String {
    let mut out = String::new();
    for item in items {
        let user = if item.key.is_some() { " 👤" } else { "" };
        let _ = writeln!(out, "  {}  {} ({}){}", item.id, item.title, item.publisher, user);
    }
    out
}

/// ページ表示（例: "< 1 | 2/6 | 3 >"）
pub fn format_pagination(page: usize, page_count: usize) -> String {
    if page_count <= 1 {
        return String::new();
    }
    let prev = if page > 1 && page <= page_count {
        format!("< {} | ", page - 1)
    } else {
        String::new()
    };
    let next = if page < page_count {
        format!(" | {} >", page + 1)
    } else {
        String::new()
    };
    format!("{}{}/{}{}", prev, page, page_count, next)
}
