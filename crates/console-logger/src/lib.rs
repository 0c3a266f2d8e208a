//! Console Logger
//!
//! A `log` backend for Leptos CSR apps. On wasm32 lines go to the browser
//! console at the matching severity; elsewhere (native tests) to stderr.

use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a logger is already installed")]
    AlreadyInstalled,
}

struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.app_name, record.level(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// `[12:01:02.345][App][INFO] message`
pub fn format_line(app_name: &str, level: Level, message: &str) -> String {
    format!("[{}][{}][{}] {}", Local::now().format("%H:%M:%S%.3f"), app_name, level, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger for the whole app. Only the first call succeeds.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), LoggerError> {
    LOGGER
        .set(ConsoleLogger { app_name, level })
        .map_err(|_| LoggerError::AlreadyInstalled)?;
    let logger = LOGGER.get().ok_or(LoggerError::AlreadyInstalled)?;
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInstalled)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("PaperTodo", Level::Warn, "disk full");
        assert!(line.ends_with("[PaperTodo][WARN] disk full"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_second_install_fails() {
        assert!(init_logger("PaperTodo", LevelFilter::Debug).is_ok());
        assert!(matches!(
            init_logger("Other", LevelFilter::Trace),
            Err(LoggerError::AlreadyInstalled)
        ));
        let installed = LOGGER.get().map(|logger| (logger.app_name, logger.level));
        assert_eq!(installed, Some(("PaperTodo", LevelFilter::Debug)));
        log::info!("logger installed");
    }
}
