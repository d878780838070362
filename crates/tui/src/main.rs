use std::{fs::OpenOptions, path::Path, sync::Mutex};

use ledger_tui::{
    app::App,
    config::{self, AppConfig},
    error::{AppError, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let mut app = App::new(config)?;
    app.run().await?;
    Ok(())
}

/// Logs go to a file since stdout belongs to the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    if config.log_file.is_empty() {
        return Ok(());
    }
    if let Some(parent) = Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledger_tui={level},api_types={level}",
            level = config.log_level
        ))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
