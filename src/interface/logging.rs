use tracing_subscriber::EnvFilter;

/// tracing subscriberを初期化する。
///
/// `RUST_LOG` でレベルを指定する（未指定なら `warn`）。例: `RUST_LOG=reading_list=debug`。
/// 出力はstderr。2回目以降の呼び出しは何もしない。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
