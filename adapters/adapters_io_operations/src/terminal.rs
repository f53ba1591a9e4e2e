//! Terminal I/O Module
//!
//! Provides an echoing character terminal over a byte reader and writer.
//! Based on cli.c

use entities_io_operations::{CharSink, EchoSource};
use std::io::{self, Read, Write};
use tracing::warn;

/// Character terminal over a `Read`/`Write` pair
///
/// The codec's sink contract cannot fail, so the first I/O error is kept and
/// can be collected with [`TerminalIo::take_error`]. After a read error the
/// terminal reports itself exhausted.
pub struct TerminalIo<R, W> {
    input: R,
    output: W,
    echo: bool,
    error: Option<io::Error>,
}

impl TerminalIo<io::Stdin, io::Stdout> {
    /// Terminal on the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> TerminalIo<R, W> {
    /// Create an echoing terminal
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            echo: true,
            error: None,
        }
    }

    /// Enable or disable local echo
    ///
    /// Disable it when the device already echoes (e.g. a cooked-mode tty).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Flush pending output
    pub fn flush(&mut self) {
        if let Err(e) = self.output.flush() {
            self.record(e);
        }
    }

    /// Take the first I/O error seen, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Split back into reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn record(&mut self, e: io::Error) {
        warn!("terminal I/O error: {}", e);
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    fn read_one(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.record(e);
                    return None;
                }
            }
        }
    }
}

impl<R: Read, W: Write> CharSink for TerminalIo<R, W> {
    fn write_char(&mut self, c: u8) {
        if let Err(e) = self.output.write_all(&[c]) {
            self.record(e);
        }
    }

    fn write_str(&mut self, s: &str) {
        if let Err(e) = self.output.write_all(s.as_bytes()) {
            self.record(e);
        }
    }
}

impl<R: Read, W: Write> EchoSource for TerminalIo<R, W> {
    fn read_char_echoed(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        // Prompts and earlier echoes must be visible before blocking
        self.flush();
        let c = self.read_one()?;
        if self.echo {
            self.write_char(c);
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_read_echoes_to_output() {
        let mut term = TerminalIo::new(&b"1a"[..], Vec::new());
        assert_eq!(term.read_char_echoed(), Some(b'1'));
        assert_eq!(term.read_char_echoed(), Some(b'a'));
        assert_eq!(term.read_char_echoed(), None);
        let (_, out) = term.into_inner();
        assert_eq!(out, b"1a");
    }

    #[test]
    fn test_echo_disabled() {
        let mut term = TerminalIo::new(&b"f"[..], Vec::new()).with_echo(false);
        assert_eq!(term.read_char_echoed(), Some(b'f'));
        let (_, out) = term.into_inner();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_str() {
        let mut term = TerminalIo::new(io::empty(), Vec::new());
        term.write_str("-ff");
        term.write_char(b'\n');
        let (_, out) = term.into_inner();
        assert_eq!(out, b"-ff\n");
    }

    #[test]
    fn test_read_error_is_recorded_and_ends_input() {
        let mut term = TerminalIo::new(FailingReader, Vec::new());
        assert_eq!(term.read_char_echoed(), None);
        assert_eq!(term.read_char_echoed(), None);
        let err = term.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(term.take_error().is_none());
    }
}
