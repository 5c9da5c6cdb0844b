use crate::error::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;

#[derive(Serialize)]
struct LogLine<'a> {
    ts: u64,
    level: &'a str,
    target: &'a str,
    message: String,
}

/// Renders one structured log line. `ts` is milliseconds since the epoch.
pub fn format_line(ts: u64, level: Level, target: &str, message: &str) -> String {
    let line = LogLine {
        ts,
        level: level.as_str(),
        target,
        message: message.to_string(),
    };

    serde_json::to_string(&line).unwrap_or_else(|_| message.to_string())
}

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            now_unix_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EffectError;

    #[test]
    fn log_line_is_one_json_object() {
        let line = format_line(1_700_000_000_000, Level::Warn, "portfolio_motion::menu", "closed \"menu\"");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["ts"], 1_700_000_000_000u64);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["target"], "portfolio_motion::menu");
        assert_eq!(parsed["message"], "closed \"menu\"");
    }

    #[test]
    fn logger_respects_level_filter() {
        let logger = ConsoleLogger {
            level: LevelFilter::Info,
        };
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn init_installs_the_logger_only_once() {
        init(LevelFilter::Debug).expect("first install succeeds");
        assert_eq!(log::max_level(), LevelFilter::Debug);

        let second = init(LevelFilter::Warn);
        assert!(matches!(second, Err(EffectError::Logger(_))));
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
