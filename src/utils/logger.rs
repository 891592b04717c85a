use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾指令：verbose 優先，其次為設定檔的 `[logging] level`
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "solid_demos=debug".to_string()
    } else {
        format!("solid_demos={}", level.unwrap_or("info"))
    }
}

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    // RUST_LOG 覆蓋設定檔
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)))
}

/// 初始化 CLI 日誌 (輸出到 stderr，stdout 保留給示範輸出)
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 初始化 JSON 日誌，供 `--format json` 使用
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}
