use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the resolved level. Verbose always means debug for
/// this crate, with `info` for everything else.
pub fn filter_directive(verbose: bool, level: &str) -> String {
    if verbose {
        "todo_board=debug,info".to_string()
    } else {
        format!("todo_board={}", level.trim().to_ascii_lowercase())
    }
}

/// `RUST_LOG` 優先，其次才是設定檔或命令列的等級
fn build_filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)))
}

fn base_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(base_layer().compact())
        .init();
}

/// JSON 格式，給容器環境的日誌收集器使用
pub fn init_json_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(base_layer().json())
        .init();
}
