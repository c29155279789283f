use crate::config::{self, defaults::DEFAULT_LOG_FILE};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Map a configured level name to a filter. Unknown names fall back to Info.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Install the global logger. Output goes to a file only: the terminal
/// belongs to the TUI once it starts.
pub fn setup_logger() -> Result<(), log::SetLoggerError> {
    let config = config::get_config_or_panic();
    let log_level = parse_level(config.logging().level());

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
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    let file_path = config.logging().file().unwrap_or(DEFAULT_LOG_FILE);

    match OpenOptions::new().create(true).append(true).open(file_path) {
        Ok(file) => {
            base_config.chain(file).apply()?;
            // Shown before the TUI takes over the screen
            println!("Logging to file: {file_path}");
        }
        Err(e) => {
            eprintln!("Warning: Failed to open log file '{file_path}': {e}");
            eprintln!("Continuing without file logging.");
            base_config.apply()?;
        }
    }

    log::info!(
        "Logger initialized with level: {}",
        config.logging().level()
    );
    Ok(())
}
