//! Output channel of a guest program.
//!
//! Guest programs print through [`core::fmt::Write`], so the same program body
//! runs against the real stdout or against an in-memory buffer.

use core::fmt::{self, Write};
use std::io::{self, Write as IoWrite};

use types::Transcript;

use crate::error::GuestError;

/// A console a guest program can print to and flush at exit.
pub trait Console: Write {
    fn flush(&mut self) -> Result<(), GuestError> {
        Ok(())
    }
}

/// Console backed by the process stdout.
pub struct StdoutWriter {
    out: io::Stdout,
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out
            .lock()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

impl Console for StdoutWriter {
    fn flush(&mut self) -> Result<(), GuestError> {
        self.out.lock().flush()?;
        Ok(())
    }
}

/// Console that keeps everything written to it in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferWriter {
    buffer: String,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn transcript(&self) -> Transcript {
        Transcript::parse(&self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Write for BufferWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Console for BufferWriter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_collects_lines_in_order() {
        let mut out = BufferWriter::new();
        writeln!(out, "first").unwrap();
        write!(out, "second ").unwrap();
        writeln!(out).unwrap();

        assert_eq!(out.as_str(), "first\nsecond \n");
        let transcript = out.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines()[1], "second ");
    }

    #[test]
    fn clear_forgets_previous_output() {
        let mut out = BufferWriter::new();
        writeln!(out, "stale").unwrap();
        out.clear();
        assert!(out.transcript().is_empty());
        assert!(out.flush().is_ok());
    }
}
