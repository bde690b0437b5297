use clap::Parser;
use todo_board::config::cli::Command;
use todo_board::utils::{logger, validation::Validate};
use todo_board::{App, CliConfig, Greeter, TodoError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(cli.verbose, &settings.log_level);
    } else {
        logger::init_cli_logger(cli.verbose, &settings.log_level);
    }

    tracing::info!("Starting todo-board");
    tracing::debug!("Resolved settings: {:?}", settings);

    let app = App::new(Greeter::new());
    let message = app.run();

    match cli.command {
        Command::Greet => {
            println!("{}", message);
        }
        Command::Serve { .. } => {
            if let Err(e) = todo_board::serve(&settings.server).await {
                fail(e);
            }
        }
    }
}

/// 依錯誤類型輸出訊息並以對應的結束碼離開
fn fail(e: TodoError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
