//! 永続化テスト
//!
//! FileStore とブックマークの再起動をまたいだ保存を検証

use forkify_common::{Ingredient, Recipe};
use forkify_rust::api::{ApiUrls, MockFetcher};
use forkify_rust::bookmarks::{BookmarkStore, BOOKMARKS_KEY};
use forkify_rust::storage::{FileStore, KeyValueStore};
use forkify_rust::RecipeModel;
use tempfile::tempdir;

fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        publisher: "Closet Cooking".to_string(),
        source_url: "http://closetcooking.com".to_string(),
        image: "http://example.com/img.jpg".to_string(),
        servings: 2,
        cooking_time: 15,
        ingredients: vec![Ingredient {
            quantity: Some(1.5),
            unit: "cups".to_string(),
            description: "milk".to_string(),
        }],
        bookmarked: false,
        key: None,
    }
}

/// 存在しないファイルは空
#[test]
fn test_file_store_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path().join("storage.json"));
    assert!(store.get(BOOKMARKS_KEY).is_none());
}

/// 保存と読み込み（親ディレクトリも作成される）
#[test]
fn test_file_store_set_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("storage.json");

    let mut store = FileStore::open(&path);
    store.set("bookmarks", "[]".to_string()).expect("保存失敗");
    assert!(path.exists());

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("bookmarks").as_deref(), Some("[]"));
}

/// 削除した値は再読み込み後も消えている
#[test]
fn test_file_store_remove() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path);
    store.set("a", "1".to_string()).unwrap();
    store.set("b", "2".to_string()).unwrap();
    store.remove("a").unwrap();

    let reopened = FileStore::open(&path);
    assert!(reopened.get("a").is_none());
    assert_eq!(reopened.get("b").as_deref(), Some("2"));
}

/// 壊れたファイルは空として扱う
#[test]
fn test_file_store_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileStore::open(&path);
    assert!(store.get(BOOKMARKS_KEY).is_none());
}

/// バージョン不一致のファイルは空として扱う
#[test]
fn test_file_store_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"version": 999, "entries": {"bookmarks": "[]"}}"#).unwrap();

    let store = FileStore::open(&path);
    assert!(store.get(BOOKMARKS_KEY).is_none());
}

/// 書き込みに失敗したら set はエラーを返す
#[cfg(target_os = "linux")]
#[test]
fn test_file_store_write_error_is_reported() {
    let mut store = FileStore::open("/dev/full");
    assert!(store.set(BOOKMARKS_KEY, "[1,2,3]".to_string()).is_err());
}

/// 保存後に一時ファイルは残らず、上書き前の内容は置き換わる
#[test]
fn test_file_store_replaces_file_without_leftovers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path);
    store.set(BOOKMARKS_KEY, "[1]".to_string()).unwrap();
    store.set(BOOKMARKS_KEY, "[2]".to_string()).unwrap();
    assert!(!store.temp_path().exists());
    assert_eq!(store.temp_path(), dir.path().join("storage.json.tmp"));

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get(BOOKMARKS_KEY).as_deref(), Some("[2]"));
}

/// ブックマークは再起動後も同じ順序・内容で復元される
#[test]
fn test_bookmarks_survive_restart() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut bookmarks = BookmarkStore::rehydrate(FileStore::open(&path));
    bookmarks.add(recipe("x"));
    let mut user_recipe = recipe("y");
    user_recipe.key = Some("user-key".to_string());
    bookmarks.add(user_recipe);
    bookmarks.add(recipe("z"));
    bookmarks.remove("x");
    let expected = bookmarks.as_slice().to_vec();

    let restored = BookmarkStore::rehydrate(FileStore::open(&path));
    assert_eq!(restored.as_slice(), expected.as_slice());
    assert_eq!(restored.get("y").unwrap().key.as_deref(), Some("user-key"));
}

/// モデル作成時にブックマークが復元される
#[test]
fn test_model_rehydrates_bookmarks() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut bookmarks = BookmarkStore::rehydrate(FileStore::open(&path));
    bookmarks.add(recipe("saved"));

    let urls = ApiUrls::new("https://example.com/recipes", None).unwrap();
    let model = RecipeModel::new(MockFetcher::new(), urls, FileStore::open(&path), 10);
    assert_eq!(model.bookmarks().len(), 1);
    assert!(model.bookmarks().contains("saved"));
    assert!(model.recipe().is_none());
}
