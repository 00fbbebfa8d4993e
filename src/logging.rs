use log::Level;

pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::Info,
    }
}

/// Routes `log` records to the browser console. Only the first call installs the logger.
pub fn init(level: Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger not installed: {err}");
    }
}
