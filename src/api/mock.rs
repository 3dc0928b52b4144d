//! テスト用の RecipeFetcher

use super::RecipeFetcher;
use crate::error::{ForkifyError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    Error(String),
}

/// 送信されたリクエストの記録
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    pub url: String,
    pub body: Option<Value>,
}

/// URLごとに決まったレスポンスを返す
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &Url, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn with_json(self, url: &Url, json: Value) -> Self {
        self.with_response(url, MockResponse::Json(json))
    }

    pub fn with_error(self, url: &Url, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// これまでに送信されたリクエスト
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl RecipeFetcher for MockFetcher {
    async fn fetch(&self, url: &Url, body: Option<&Value>) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(MockRequest {
                url: url.to_string(),
                body: body.cloned(),
            });
        }

        match self.responses.get(url.as_str()) {
            Some(MockResponse::Json(json)) => Ok(json.clone()),
            Some(MockResponse::Error(e)) => Err(ForkifyError::Fetch(e.clone())),
            None => Err(ForkifyError::Fetch(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
