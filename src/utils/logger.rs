use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context;
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber once, writing to `log_file`.
///
/// The terminal belongs to the TUI, so logs never go to stdout/stderr.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    TRACING_INIT.get_or_try_init(|| -> anyhow::Result<()> {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set global tracing subscriber")?;
        Ok(())
    })?;
    Ok(())
}
