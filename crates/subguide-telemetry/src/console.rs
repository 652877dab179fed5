//! Browser console sink for `tracing-subscriber`.

use std::io;

use gloo::console;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Creates one [`ConsoleWriter`] per event, tagged with the event level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers a formatted event and emits it to the console when dropped.
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
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => console::error!(line),
            Level::WARN => console::warn!(line),
            Level::INFO => console::info!(line),
            _ => console::debug!(line),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}
