//! 永続キー/値ストレージ
//!
//! ブラウザの localStorage に相当する。値は文字列で、読み書きは同期。
//! `FileStore` は1つのJSONファイルに全キーを保存する。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// ストレージファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageFile {
    /// バージョン（互換性チェック用）
    version: u32,
    entries: BTreeMap<String, String>,
}

impl StorageFile {
    const CURRENT_VERSION: u32 = 1;
}

impl Default for StorageFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSONファイルに保存するストレージ
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: StorageFile,
}

impl FileStore {
    /// ストレージファイルを開く
    ///
    /// ファイルがない・読めない・バージョン不一致の場合は空として扱う。
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = Self::load(&path);
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StorageFile {
        if !path.exists() {
            return StorageFile::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ストレージを開けません");
                return StorageFile::default();
            }
        };

        match serde_json::from_reader::<_, StorageFile>(BufReader::new(file)) {
            Ok(storage) if storage.version == StorageFile::CURRENT_VERSION => storage,
            Ok(storage) => {
                tracing::warn!(version = storage.version, "ストレージのバージョン不一致、空として扱います");
                StorageFile::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ストレージのパースに失敗");
                StorageFile::default()
            }
        }
    }

    /// 一時ファイルに書いてから置き換える（書き込み途中で落ちても元のファイルは残る）
    ///
    /// 通常ファイル以外（デバイス等）にはそのまま書き込む。
    fn save(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.file)?;

        let is_special = fs::metadata(&self.path)
            .map(|m| !m.is_file())
            .unwrap_or(false);
        if is_special {
            let mut file = OpenOptions::new().write(true).open(&self.path)?;
            file.write_all(&bytes)?;
            file.flush()?;
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// 保存時の一時ファイル（例: storage.json → storage.json.tmp）
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.file.entries.insert(key.to_string(), value);
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.file.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// メモリ上のストレージ（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("bookmarks").is_none());
        store.set("bookmarks", "[]".to_string()).unwrap();
        assert_eq!(store.get("bookmarks").as_deref(), Some("[]"));
        store.remove("bookmarks").unwrap();
        assert!(store.get("bookmarks").is_none());
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
    }
}
