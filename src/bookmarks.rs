//! ブックマークストア
//!
//! ブックマークしたレシピを追加順に保持し、変更のたびに全件を
//! `KeyValueStore` の1キーへJSON配列として書き込む。
//! 読み込みは起動時の `rehydrate` のみ。

use crate::storage::KeyValueStore;
use forkify_common::Recipe;

/// ブックマークの保存キー
pub const BOOKMARKS_KEY: &str = "bookmarks";

#[derive(Debug)]
pub struct BookmarkStore<S> {
    store: S,
    items: Vec<Recipe>,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// 保存済みのブックマークを読み込む
    ///
    /// 未保存なら空。壊れたデータは警告を出して無視する。
    pub fn rehydrate(store: S) -> Self {
        let items = match store.get(BOOKMARKS_KEY) {
            Some(json) => match serde_json::from_str::<Vec<Recipe>>(&json) {
                Ok(items) => dedup_by_id(items),
                Err(e) => {
                    tracing::warn!(error = %e, "保存済みブックマークのパースに失敗、無視します");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::debug!(count = items.len(), "ブックマーク読み込み");
        Self { store, items }
    }

    /// ブックマークを追加
    ///
    /// 同じ id が既にあれば何もせず false を返す。
    pub fn add(&mut self, mut recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            tracing::warn!(id = %recipe.id, "ブックマーク済みのため追加しません");
            return false;
        }
        recipe.bookmarked = true;
        self.items.push(recipe);
        self.persist();
        true
    }

    /// ブックマークを削除（見つからなければ false）
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|r| r.id == id) else {
            tracing::warn!(id, "ブックマークが見つかりません");
            return false;
        };
        self.items.remove(index);
        self.persist();
        true
    }

    /// 全件削除（保存データも消す）
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.store.remove(BOOKMARKS_KEY) {
            tracing::warn!(error = %e, "ブックマークの削除に失敗");
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    /// 全件を書き込む。失敗はログのみ
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "ブックマークのシリアライズに失敗");
                return;
            }
        };
        match self.store.set(BOOKMARKS_KEY, json) {
            Ok(()) => tracing::debug!(count = self.items.len(), "ブックマーク保存"),
            Err(e) => tracing::warn!(error = %e, "ブックマークの保存に失敗"),
        }
    }
}

/// 同じ id の2件目以降を捨てる
fn dedup_by_id(items: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}
