//! Tracing output for the browser console.
//!
//! A `tracing-subscriber` fmt layer formats each event without timestamps
//! or colours; [`ConsoleMakeWriter`] hands the finished line to the
//! matching `console.*` method.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::error::{Result, UiError};

/// Install the global subscriber at `level` (`error` … `trace`).
///
/// # Errors
///
/// Returns [`UiError::Telemetry`] if the level is unknown or a subscriber
/// is already installed.
pub fn init(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|e| UiError::Telemetry(format!("level '{level}': {e}")))?;
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(filter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| UiError::Telemetry(e.to_string()))
}

/// Creates one [`ConsoleWriter`] per event.
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

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = JsValue::from_str(&self.line());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_writer_buffers_until_drop() -> io::Result<()> {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"INFO estimate computed euros=322000\n")?;
        assert_eq!(writer.line(), "INFO estimate computed euros=322000");
        // Emptied so the drop does not call into the browser.
        writer.buffer.clear();
        Ok(())
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(matches!(init("loud"), Err(UiError::Telemetry(_))));
    }
}
