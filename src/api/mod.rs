//! レシピAPI連携
//!
//! モデルは `RecipeFetcher` 経由でのみ通信する。
//! 本番は `HttpFetcher`（reqwest）、テストは `MockFetcher` を使う。

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::{MockFetcher, MockRequest, MockResponse};

use crate::error::{ForkifyError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

/// レシピAPIへのリクエスト
///
/// `body` が None なら GET、Some なら JSON ボディ付きの POST。
#[async_trait]
pub trait RecipeFetcher: Send + Sync {
    async fn fetch(&self, url: &Url, body: Option<&Value>) -> Result<Value>;
}

/// レシピAPIのURL組み立て
#[derive(Debug, Clone)]
pub struct ApiUrls {
    base: Url,
    key: Option<String>,
}

impl ApiUrls {
    pub fn new(base: &str, key: Option<String>) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| ForkifyError::Config(format!("api_base が不正です: {} ({})", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(ForkifyError::Config(format!("api_base が不正です: {}", base)));
        }
        Ok(Self { base, key })
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// `{base}/{id}?key={key}`
    pub fn recipe(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        self.with_key(url)
    }

    /// `{base}?key={key}&search={query}`
    pub fn search(&self, query: &str) -> Url {
        let mut url = self.with_key(self.base.clone());
        url.query_pairs_mut().append_pair("search", query);
        url
    }

    /// `{base}?key={key}`（レシピ投稿先）
    pub fn upload(&self) -> Url {
        self.with_key(self.base.clone())
    }

    fn with_key(&self, mut url: Url) -> Url {
        if let Some(key) = &self.key {
            url.query_pairs_mut().append_pair("key", key);
        }
        url
    }
}
