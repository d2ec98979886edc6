use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "CONFSCHED_LOG";
const LOG_FILE: &str = "confsched.log";

pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("confsched")
}

/// Log to a file under the data dir; the terminal belongs to the UI.
/// `CONFSCHED_LOG` takes precedence over `RUST_LOG`.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = log_dir();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE);
    let log_file = fs::File::create(&log_path)?;

    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter));

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(log_path)
}
