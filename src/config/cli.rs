use crate::config::toml_config::TodoConfig;
use crate::config::{Overrides, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-board")]
#[command(about = "A tiny todo board with a stub HTTP endpoint")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON; `--json-logs=false` overrides the config file
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub json_logs: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the greeting and exit
    Greet,
    /// Run the HTTP stub
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        let (host, port) = match &self.command {
            Command::Serve { host, port } => (host.clone(), *port),
            Command::Greet => (None, None),
        };
        Overrides {
            host,
            port,
            json_logs: self.json_logs,
        }
    }

    /// 載入 TOML 檔案 (若有指定)，先驗證檔案本身再套用命令列覆蓋設定
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TodoConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Settings::resolve(file.as_ref(), &self.overrides()))
    }
}
