//! 検索結果とページ状態

use forkify_common::{page_count, page_slice, SearchResultItem};

#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    /// サーバーの並び順のまま
    pub results: Vec<SearchResultItem>,
    /// 現在のページ（1始まり）
    pub page: usize,
    pub results_per_page: usize,
}

impl SearchState {
    pub fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page: results_per_page.max(1),
        }
    }

    /// 新しい検索結果に置き換え、ページを1に戻す
    pub fn replace(&mut self, query: String, results: Vec<SearchResultItem>) {
        self.query = query;
        self.results = results;
        self.page = 1;
    }

    /// 指定ページに移動してその結果を返す（0は1ページ目として扱う）
    pub fn page_results(&mut self, page: usize) -> &[SearchResultItem] {
        self.page = page.max(1);
        self.current_page_results()
    }

    pub fn current_page_results(&self) -> &[SearchResultItem] {
        page_slice(&self.results, self.page, self.results_per_page)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.results.len(), self.results_per_page)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1 && self.page <= self.page_count()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count()
    }
}
