//! Program logger configuration.
use anyhow::Result;
use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::str::FromStr;
use std::sync::OnceLock;

/// The log level used when none is supplied
pub const DEFAULT_LOG_LEVEL: &str = "info";

static LOGGER_INITIALISED: OnceLock<()> = OnceLock::new();

/// Whether the program logger has been set up
pub fn is_logger_initialised() -> bool {
    LOGGER_INITIALISED.get().is_some()
}

/// Initialise the program logger, writing to stderr.
///
/// `level` overrides [`DEFAULT_LOG_LEVEL`] when given.
pub fn init(level: Option<&str>) -> Result<()> {
    let level = LevelFilter::from_str(level.unwrap_or(DEFAULT_LOG_LEVEL))?;

    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    let _ = LOGGER_INITIALISED.set(());
    Ok(())
}
