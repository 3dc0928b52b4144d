use crate::error::{ForkifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://forkify-api.herokuapp.com/api/v2/recipes";
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub api_key: Option<String>,
    pub results_per_page: usize,
    /// リクエストのタイムアウト秒数（None なら無制限）
    pub timeout_seconds: Option<u64>,
    /// ブックマーク保存先（None なら既定のデータディレクトリ）
    pub storage_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            api_key: None,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            timeout_seconds: None,
            storage_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ForkifyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("forkify").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.results_per_page == 0 {
            return Err(ForkifyError::Config("results_per_page は1以上にしてください".into()));
        }
        if self.api_base.trim().is_empty() {
            return Err(ForkifyError::Config("api_base が空です".into()));
        }
        Ok(())
    }

    /// APIキー（環境変数 FORKIFY_API_KEY を優先）
    pub fn api_key(&self) -> Option<String> {
        match std::env::var("FORKIFY_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => self.api_key.clone(),
        }
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// ブックマーク保存ファイルのパス
    pub fn storage_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        let data = dirs::data_dir()
            .ok_or_else(|| ForkifyError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("forkify").join("storage.json"))
    }
}
