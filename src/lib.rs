pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{router, serve, serve_on, BOARD_LOCATION};
pub use app::item_use_case::{append, ItemUseCase};
pub use app::runner::App;
pub use config::{ServerConfig, Settings};
pub use domain::greeter::Greeter;
pub use domain::model::{Item, TodoBoard};
pub use utils::error::{Result, TodoError};
