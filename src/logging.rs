//! ログ初期化（tracing-subscriber）
//!
//! ライブラリ側は `tracing` のイベントを出すだけで、出力先はバイナリが決める。
//! `RUST_LOG` があればそれを優先する。

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `--verbose` なら debug、それ以外は warn
pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

pub fn init_logging(verbose: bool) {
    let level = level_for(verbose).as_str().to_lowercase();
    let default_filter = format!("forkify={0},forkify_rust={0}", level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 標準出力はレシピ表示に使うのでログは標準エラーへ
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
