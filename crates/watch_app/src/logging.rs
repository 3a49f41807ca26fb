//! Logging initialization for the watcher binary.
//!
//! Appends to `<storage>/bot.log` and mirrors to the terminal. Every line
//! reads `[YYYY-MM-DD HH:MM:SS] message` in local time.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    format_description, ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger,
    TermLogger, TerminalMode, WriteLogger,
};

pub fn initialize(log_path: &Path) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(file_logger) = create_file_logger(level, config, log_path) {
        loggers.push(file_logger);
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_custom(format_description!(
            "[[[year]-[month]-[day] [hour]:[minute]:[second]]"
        ))
        .set_max_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off);
    // Stays on UTC when the local offset cannot be determined.
    let _ = builder.set_time_offset_to_local();
    builder.build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", log_path, err);
            None
        }
    }
}
