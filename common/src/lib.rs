//! Forkify Common Library
//!
//! CLIと将来のWeb(WASM)フロントエンドで共有される型と純粋関数（I/Oなし）

pub mod types;
pub mod wire;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod pagination;
pub mod servings;

pub use types::{Ingredient, Recipe, SearchResultItem};
pub use wire::NewRecipePayload;
pub use error::{Error, Result};
pub use normalizer::{normalize_recipe, normalize_search_item, parse_recipe_response, parse_search_response};
pub use parser::{build_upload_payload, parse_ingredient, parse_ingredients, FormFields};
pub use pagination::{page_count, page_slice};
pub use servings::scale_ingredients;
