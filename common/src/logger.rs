use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;

/// Environment variable controlling the log level of the harness binary.
pub const LOG_LEVEL_ENV: &str = "HARNESS_LOG";

/// Initializes the logger from the `HARNESS_LOG` environment variable.
///
/// Logging is off by default: the harness promises to print nothing on a
/// clean run, so progress output only appears when explicitly requested.
pub fn init_from_env() {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_default();
    init_logger(&level);
}

pub fn init_logger(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Off,
    };

    Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(level)
        // stderr only: stdout belongs to the comparison contract.
        .chain(std::io::stderr())
        .apply()
        .expect("Failed to initialize logger");
}
