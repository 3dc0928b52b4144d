use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForkifyError {
    /// 通信失敗・非2xxレスポンス
    #[error("API呼び出しエラー: {0}")]
    Fetch(String),

    /// レスポンスの形が想定と異なる
    #[error("APIレスポンスのパースに失敗: {0}")]
    Parse(String),

    /// 投稿フォームなどの入力が不正
    #[error("入力エラー: {0}")]
    Validation(String),

    #[error("APIキーが設定されていません。`forkify config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("レシピが読み込まれていません")]
    NoRecipeLoaded,

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<forkify_common::Error> for ForkifyError {
    fn from(err: forkify_common::Error) -> Self {
        match err {
            forkify_common::Error::Json(e) => ForkifyError::Parse(e.to_string()),
            forkify_common::Error::Parse(msg) => ForkifyError::Parse(msg),
            forkify_common::Error::Validation(msg) => ForkifyError::Validation(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ForkifyError>;
