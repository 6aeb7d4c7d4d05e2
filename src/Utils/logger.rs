use chrono::Local;
use log::{LevelFilter, warn};
use simplelog::*;
use std::fs::File;

/// "debug", "info", "warn", "error", "off" or "none"
pub fn parse_loglevel(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" | "none" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// Installs a terminal logger and, with `log_to_file`, a file logger writing to
/// `log_<date>_<time>.txt` in the working directory.
/// Returns false when a logger was already installed; the old one stays active.
pub fn init_logger(loglevel: &str, log_to_file: bool) -> bool {
    let level = parse_loglevel(loglevel);
    let log_option = level.unwrap_or(LevelFilter::Info);

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let mut file_error = None;
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        match File::create(&name) {
            Ok(file) => loggers.push(WriteLogger::new(log_option, Config::default(), file)),
            Err(e) => file_error = Some(format!("{}: {}", name, e)),
        }
    }

    let installed = CombinedLogger::init(loggers).is_ok();
    if level.is_none() {
        warn!("unknown loglevel {:?}, using info", loglevel);
    }
    if let Some(e) = file_error {
        warn!("cannot create log file {}", e);
    }
    installed
}
