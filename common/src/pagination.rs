//! 検索結果のページ分割

/// 指定ページの要素を返す（ページ番号は1始まり）
///
/// 範囲は `[(page-1) * per_page, page * per_page)` を結果の長さで切り詰めたもの。
/// 範囲外のページや `page == 0` は空スライスになる。
///
/// # Examples
/// ```
/// use forkify_common::page_slice;
///
/// let results = [1, 2, 3, 4, 5];
/// assert_eq!(page_slice(&results, 2, 2), &[3, 4]);
/// assert_eq!(page_slice(&results, 3, 2), &[5]);
/// assert!(page_slice(&results, 4, 2).is_empty());
/// ```
pub fn page_slice<T>(results: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page).min(results.len());
    let end = page.saturating_mul(per_page).min(results.len());
    &results[start..end]
}

/// 総ページ数
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}
