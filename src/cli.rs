use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "forkify")]
#[command(about = "レシピ検索・ブックマーク・投稿ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レシピを検索して結果を表示
    Search {
        /// 検索語（例: pizza）
        #[arg(required = true)]
        query: String,

        /// 表示するページ
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// レシピを表示
    Show {
        /// レシピID
        #[arg(required = true)]
        id: String,

        /// サービング数を変更して表示
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// レシピのブックマークを切り替え
    Bookmark {
        /// レシピID
        #[arg(required = true)]
        id: String,
    },

    /// ブックマーク一覧
    Bookmarks {
        /// すべてのブックマークを削除
        #[arg(long)]
        clear: bool,
    },

    /// レシピを投稿（未指定の項目は対話入力）
    Upload {
        /// フォーム項目（例: --field title=Pasta --field ingredient-1=0.5,kg,Rice）
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// 未指定の項目を対話入力しない
        #[arg(long)]
        no_input: bool,
    },

    /// 設定を管理
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
