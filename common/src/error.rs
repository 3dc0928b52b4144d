//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// APIペイロードの形が想定と異なる
    #[error("Parse error: {0}")]
    Parse(String),

    /// ユーザー入力（レシピ投稿フォーム）が不正
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
