//! レシピの状態管理
//!
//! 検索結果・ページ・表示中のレシピ・ブックマークを `AppState` にまとめ、
//! `RecipeModel` だけが書き換える。操作はすべて `&mut self` を取るので
//! 書き手は常に1つ。非同期操作は通信の完了後にまとめて状態を置き換え、
//! 失敗時には何も変更しない。

use crate::api::{ApiUrls, HttpFetcher, RecipeFetcher};
use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::error::{ForkifyError, Result};
use crate::search::SearchState;
use crate::storage::{FileStore, KeyValueStore};
use forkify_common::{
    build_upload_payload, parse_recipe_response, parse_search_response, scale_ingredients,
    FormFields, Recipe, SearchResultItem,
};

/// アプリケーションの状態
#[derive(Debug)]
pub struct AppState<S> {
    /// 表示中のレシピ
    pub recipe: Option<Recipe>,
    pub search: SearchState,
    pub bookmarks: BookmarkStore<S>,
}

pub struct RecipeModel<F, S> {
    fetcher: F,
    urls: ApiUrls,
    state: AppState<S>,
}

impl RecipeModel<HttpFetcher, FileStore> {
    /// 設定からHTTPクライアントとファイルストレージを組み立てる
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::from_config(config)?;
        let urls = ApiUrls::new(&config.api_base, config.api_key())?;
        let store = FileStore::open(config.storage_path()?);
        Ok(Self::new(fetcher, urls, store, config.results_per_page))
    }
}

impl<F: RecipeFetcher, S: KeyValueStore> RecipeModel<F, S> {
    /// 空の状態で作成し、ブックマークをストレージから復元する
    pub fn new(fetcher: F, urls: ApiUrls, store: S, results_per_page: usize) -> Self {
        Self {
            fetcher,
            urls,
            state: AppState {
                recipe: None,
                search: SearchState::new(results_per_page),
                bookmarks: BookmarkStore::rehydrate(store),
            },
        }
    }

    pub fn state(&self) -> &AppState<S> {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.state.recipe.as_ref()
    }

    pub fn search(&self) -> &SearchState {
        &self.state.search
    }

    pub fn bookmarks(&self) -> &BookmarkStore<S> {
        &self.state.bookmarks
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// レシピを読み込んで表示中のレシピにする
    ///
    /// `bookmarked` は読み込みのたびにブックマークから計算し直す。
    pub async fn load_recipe(&mut self, id: &str) -> Result<&Recipe> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ForkifyError::Validation("レシピIDが空です".into()));
        }

        let value = self.fetcher.fetch(&self.urls.recipe(id), None).await?;
        let mut recipe = parse_recipe_response(value)?;
        recipe.bookmarked = self.state.bookmarks.contains(&recipe.id);

        tracing::info!(id = %recipe.id, title = %recipe.title, bookmarked = recipe.bookmarked, "レシピ読み込み");
        Ok(&*self.state.recipe.insert(recipe))
    }

    /// 検索してその結果を保持する（ページは1に戻る）
    ///
    /// クエリと結果は成功時にまとめて確定する。失敗時は前回の検索が残る。
    pub async fn load_search_results(&mut self, query: &str) -> Result<usize> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ForkifyError::Validation("検索語が空です".into()));
        }

        let value = self.fetcher.fetch(&self.urls.search(query), None).await?;
        let results = parse_search_response(value)?;

        let count = results.len();
        self.state.search.replace(query.to_string(), results);
        tracing::info!(query, count, "検索結果");
        Ok(count)
    }

    /// 検索結果の1ページ分を返す（None なら現在のページ）
    pub fn search_results_page(&mut self, page: Option<usize>) -> &[SearchResultItem] {
        let page = page.unwrap_or(self.state.search.page);
        self.state.search.page_results(page)
    }

    /// サービング数を変更し、材料の分量を比例させる
    pub fn update_servings(&mut self, new_servings: u32) -> Result<()> {
        if new_servings == 0 {
            return Err(ForkifyError::Validation("servings は1以上にしてください".into()));
        }
        let recipe = self
            .state
            .recipe
            .as_mut()
            .ok_or(ForkifyError::NoRecipeLoaded)?;

        scale_ingredients(&mut recipe.ingredients, recipe.servings, new_servings);
        tracing::debug!(id = %recipe.id, from = recipe.servings, to = new_servings, "サービング数変更");
        recipe.servings = new_servings;
        Ok(())
    }

    /// ブックマークに追加（同じ id があれば追加しない）
    pub fn add_bookmark(&mut self, recipe: Recipe) -> bool {
        let id = recipe.id.clone();
        let added = self.state.bookmarks.add(recipe);
        if let Some(current) = self.state.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = true;
            }
        }
        added
    }

    /// ブックマークから削除
    pub fn delete_bookmark(&mut self, id: &str) -> bool {
        let removed = self.state.bookmarks.remove(id);
        if let Some(current) = self.state.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = false;
            }
        }
        removed
    }

    /// ブックマークをすべて削除
    pub fn clear_bookmarks(&mut self) {
        self.state.bookmarks.clear();
        if let Some(current) = self.state.recipe.as_mut() {
            current.bookmarked = false;
        }
    }

    /// 表示中のレシピのブックマークを切り替える
    ///
    /// # Returns
    /// 切り替え後にブックマークされているか
    pub fn toggle_bookmark(&mut self) -> Result<bool> {
        let current = self
            .state
            .recipe
            .as_ref()
            .ok_or(ForkifyError::NoRecipeLoaded)?;

        if current.bookmarked {
            let id = current.id.clone();
            self.delete_bookmark(&id);
            Ok(false)
        } else {
            let recipe = current.clone();
            self.add_bookmark(recipe);
            Ok(true)
        }
    }

    /// レシピを投稿し、表示中のレシピにしてブックマークする
    ///
    /// 材料の形式が1つでも不正なら通信せずにエラー。
    pub async fn upload_recipe(&mut self, fields: &FormFields) -> Result<&Recipe> {
        let payload = build_upload_payload(fields)?;
        if !self.urls.has_key() {
            return Err(ForkifyError::MissingApiKey);
        }
        let body = serde_json::to_value(&payload)?;

        let value = self.fetcher.fetch(&self.urls.upload(), Some(&body)).await?;
        let mut recipe = parse_recipe_response(value)?;

        tracing::info!(id = %recipe.id, title = %recipe.title, "レシピ投稿");
        self.state.bookmarks.add(recipe.clone());
        recipe.bookmarked = true;
        Ok(&*self.state.recipe.insert(recipe))
    }
}
