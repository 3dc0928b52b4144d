//! reqwest による RecipeFetcher 実装

use super::RecipeFetcher;
use crate::config::Config;
use crate::error::{ForkifyError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ForkifyError::Fetch(format!("HTTPクライアントの初期化に失敗: {}", e)))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.timeout_seconds.map(Duration::from_secs))
    }
}

#[async_trait]
impl RecipeFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, body: Option<&Value>) -> Result<Value> {
        let request = match body {
            Some(body) => self.client.post(url.clone()).json(body),
            None => self.client.get(url.clone()),
        };
        // クエリにAPIキーが含まれるのでパスのみ記録
        tracing::debug!(path = url.path(), post = body.is_some(), "リクエスト送信");

        let response = request
            .send()
            .await
            .map_err(|e| ForkifyError::Fetch(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ForkifyError::Fetch(e.to_string()))?;

        if !status.is_success() {
            return Err(ForkifyError::Fetch(format!(
                "{} ({})",
                error_message(&text, status),
                status.as_u16()
            )));
        }

        serde_json::from_str(&text)
            .map_err(|e| ForkifyError::Parse(format!("レスポンスがJSONではありません: {}", e)))
    }
}

/// エラーレスポンスの `message` を取り出す（なければステータスの説明文）
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_message_from_body() {
        let body = r#"{"status":"fail","message":"Invalid _id: 123"}"#;
        assert_eq!(error_message(body, StatusCode::BAD_REQUEST), "Invalid _id: 123");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message("<html>", StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn test_new_with_timeout() {
        assert!(HttpFetcher::new(Some(Duration::from_secs(5))).is_ok());
    }
}
