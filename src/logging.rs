use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Sends tracing output to `path`. `RUST_LOG` overrides the default `info` level.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = open_log_file(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Earlier runs stay in the log; every subcommand shares the same file.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
