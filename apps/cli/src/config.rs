use dotenv::dotenv;
use flexi_logger::{Logger, LoggerHandle};
use lab_site_core::config::DEFAULT_DATA_DIR;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub data_dir: PathBuf,
    pub debug: bool,
}

/// Resolves checker settings from `.env` and the process environment.
pub fn init_app_config() -> CheckerConfig {
    // Load environment variables from .env file
    dotenv().ok();

    let data_dir = env::var("LAB_DATA_DIR")
        .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
    let debug = env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0");

    CheckerConfig { data_dir, debug }
}

/// Starts stderr logging. `RUST_LOG` wins over the default level.
pub fn init_logging(debug: bool) -> color_eyre::eyre::Result<LoggerHandle> {
    let level = if debug { "debug" } else { "info" };
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
