//! Character I/O Module
//!
//! Provides the output and echoing input contracts of a character terminal.
//! Based on cli.c
//!
//! Characters are single bytes. Terminals are expected to carry ASCII; the
//! codec never produces anything else.

/// Character output device
pub trait CharSink {
    /// Write one character
    fn write_char(&mut self, c: u8);

    /// Write every byte of `s` in order
    fn write_str(&mut self, s: &str) {
        for c in s.bytes() {
            self.write_char(c);
        }
    }
}

/// Blocking character input that echoes what it reads
///
/// Every character returned by [`EchoSource::read_char_echoed`] has already
/// been written back to the same device's output side.
pub trait EchoSource: CharSink {
    /// Block until a character is available, echo it and return it
    ///
    /// Returns `None` once the source is exhausted; callers treat that the
    /// same as any other non-digit character.
    fn read_char_echoed(&mut self) -> Option<u8>;
}

impl CharSink for String {
    fn write_char(&mut self, c: u8) {
        self.push(char::from(c));
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

impl CharSink for Vec<u8> {
    fn write_char(&mut self, c: u8) {
        self.push(c);
    }
}

impl<T: CharSink + ?Sized> CharSink for &mut T {
    fn write_char(&mut self, c: u8) {
        (**self).write_char(c);
    }

    fn write_str(&mut self, s: &str) {
        (**self).write_str(s);
    }
}

impl<T: EchoSource + ?Sized> EchoSource for &mut T {
    fn read_char_echoed(&mut self) -> Option<u8> {
        (**self).read_char_echoed()
    }
}
