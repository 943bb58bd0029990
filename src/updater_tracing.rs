use crate::config::Config;
use anyhow::{Context as _, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "note-updater.log";

/// Logs to a daily rolling file, and to the logs view when running the tui
pub fn init(config: &Config, with_tui: bool) -> Result<()> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(&config.log_dir)
        .with_context(|| format!("Failed to log to {}", config.log_dir.display()))?;

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(file_appender);

    let env_filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("note_updater=info,error"))?;

    let mut layers = vec![fmt_layer.boxed()];

    if with_tui {
        // The log level tui logger will capture
        let default_level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        tui_logger::init_logger(default_level)?;
        layers.push(tui_logger::tracing_subscriber_layer().boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(layers)
        .try_init()?;

    Ok(())
}
