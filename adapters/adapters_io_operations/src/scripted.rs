//! Scripted Terminal Module
//!
//! Replays a fixed input session in memory and captures everything written,
//! echoes included.

use entities_io_operations::{CharSink, EchoSource};
use std::collections::VecDeque;

/// In-memory terminal fed from a script
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<u8>,
    output: String,
    reads: usize,
}

impl ScriptedTerminal {
    /// Create a terminal that will yield the bytes of `script` in order
    pub fn new(script: &str) -> Self {
        Self {
            input: script.bytes().collect(),
            output: String::new(),
            reads: 0,
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Input not consumed yet
    pub fn remaining_input(&self) -> String {
        self.input.iter().map(|&b| char::from(b)).collect()
    }

    /// Number of successful reads
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Discard captured output
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl CharSink for ScriptedTerminal {
    fn write_char(&mut self, c: u8) {
        self.output.push(char::from(c));
    }
}

impl EchoSource for ScriptedTerminal {
    fn read_char_echoed(&mut self) -> Option<u8> {
        let c = self.input.pop_front()?;
        self.reads += 1;
        self.write_char(c);
        Some(c)
    }
}
