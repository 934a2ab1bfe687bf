//! Console Logger
//!
//! A `tracing` subscriber for the browser. Every formatted line goes to
//! the devtools console at the matching level (stderr off-wasm).

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Unknown log level '{0}'")]
    InvalidLevel(String),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Console method a line is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Log,
        }
    }
}

/// Wall-clock time in the local zone, `HH:MM:SS.mmm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it when dropped.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    /// The buffered event without its trailing newline; `None` when blank.
    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(ConsoleMethod::from(self.level), &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use web_sys::console;

    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{line}");
}

pub type ConsoleSubscriberBuilder =
    SubscriberBuilder<DefaultFields, Format<Full, LocalClock>, LevelFilter, ConsoleMakeWriter>;

/// Formatter writing to the console.
pub fn subscriber_builder(level: Level) -> ConsoleSubscriberBuilder {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .with_timer(LocalClock)
        .with_max_level(level)
}

pub fn parse_level(level: &str) -> Result<Level, LoggerError> {
    Level::from_str(level.trim()).map_err(|_| LoggerError::InvalidLevel(level.to_string()))
}

/// Install the console subscriber globally. `log` records are bridged too.
pub fn init_logger(app_name: &str, level: &str) -> Result<(), LoggerError> {
    let level = parse_level(level)?;

    subscriber_builder(level)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialised(e.to_string()))?;

    tracing::info!(app = app_name, %level, "Logger initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn test_writer_buffers_one_line() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"12:00:00.000  INFO snapshot applied ").unwrap();
        writer.write_all(b"items=3\n").unwrap();
        assert_eq!(
            writer.take_line().as_deref(),
            Some("12:00:00.000  INFO snapshot applied items=3")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level(" DEBUG ").unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_invalid_level() {
        let err = init_logger("test", "loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref l) if l == "loud"));
    }
}
