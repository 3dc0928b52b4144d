use clap::Parser;
use forkify_rust::{cli, config, form_input, logging, model, render};
use cli::{Cli, Commands};
use config::Config;
use forkify_rust::Result;
use indicatif::{ProgressBar, ProgressStyle};
use model::RecipeModel;
use std::future::Future;
use std::time::Duration;

/// 通信中はスピナーを表示
async fn with_spinner<T>(message: &str, fut: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = fut.await;
    spinner.finish_and_clear();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, page } => {
            let mut model = RecipeModel::from_config(&config)?;
            let count = with_spinner("検索中...", model.load_search_results(&query)).await?;
            println!("🔍 \"{}\" の検索結果: {}件\n", query, count);

            let items = model.search_results_page(Some(page)).to_vec();
            if items.is_empty() {
                println!("このページに結果はありません");
            } else {
                print!("{}", render::format_results(&items));
            }
            let search = model.search();
            let pagination = render::format_pagination(search.page, search.page_count());
            if !pagination.is_empty() {
                println!("\n{}", pagination);
            }
        }

        Commands::Show { id, servings } => {
            let mut model = RecipeModel::from_config(&config)?;
            with_spinner("レシピを読み込み中...", model.load_recipe(&id)).await?;
            if let Some(servings) = servings {
                model.update_servings(servings)?;
            }
            if let Some(recipe) = model.recipe() {
                print!("{}", render::format_recipe(recipe));
            }
        }

        Commands::Bookmark { id } => {
            let mut model = RecipeModel::from_config(&config)?;
            with_spinner("レシピを読み込み中...", model.load_recipe(&id)).await?;
            let bookmarked = model.toggle_bookmark()?;
            if let Some(recipe) = model.recipe() {
                if bookmarked {
                    println!("★ ブックマークしました: {}", recipe.title);
                } else {
                    println!("☆ ブックマークを解除しました: {}", recipe.title);
                }
            }
        }

        Commands::Bookmarks { clear } => {
            let mut model = RecipeModel::from_config(&config)?;
            if clear {
                model.clear_bookmarks();
                println!("✔ ブックマークをすべて削除しました");
                return Ok(());
            }

            let bookmarks = model.bookmarks();
            if bookmarks.is_empty() {
                println!("ブックマークはまだありません");
            } else {
                println!("★ ブックマーク: {}件\n", bookmarks.len());
                let items: Vec<_> = bookmarks.iter().map(|r| r.to_search_item()).collect();
                print!("{}", render::format_results(&items));
            }
        }

        Commands::Upload { fields, no_input } => {
            let mut form = form_input::fields_from_pairs(&fields)?;
            if !no_input {
                form_input::prompt_missing_fields(&mut form)?;
            }

            let mut model = RecipeModel::from_config(&config)?;
            let recipe = with_spinner("投稿中...", model.upload_recipe(&form)).await?;
            println!("✔ レシピを投稿しました\n");
            print!("{}", render::format_recipe(recipe));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  API: {}", config.api_base);
                println!("  1ページの件数: {}", config.results_per_page);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  保存先: {}", config.storage_path()?.display());
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
