use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Maps a configured level name onto a filter. Unknown names fall back to
/// `Info`.
pub fn level_filter(level: &str) -> LevelFilter {
    level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
}

/// Installs the global logger.
///
/// Output goes to the configured log file, or to stderr when none is set or
/// the file cannot be opened, so stdout stays free for the report.
pub fn setup_logger(logging: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let log_level = level_filter(logging.level());

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    match logging.file() {
        Some(file_path) => match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => {
                base_config.chain(file).apply()?;
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Logging to stderr instead.");
                base_config.chain(std::io::stderr()).apply()?;
            }
        },
        None => {
            base_config.chain(std::io::stderr()).apply()?;
        }
    }

    log::info!("Logger initialized with level: {}", logging.level());
    Ok(())
}
