//! forkify-rust: レシピ検索・ブックマーク・投稿クライアント
//!
//! 状態は `model::RecipeModel` が一元管理する。通信は `api`、
//! 永続化は `storage`、純粋なロジックは `forkify_common` にある。

pub mod api;
pub mod bookmarks;
pub mod cli;
pub mod config;
pub mod error;
pub mod form_input;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod storage;

pub use error::{ForkifyError, Result};
pub use model::{AppState, RecipeModel};
