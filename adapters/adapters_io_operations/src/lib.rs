//! Adapters Layer: I/O Operations
//!
//! Provides character terminal adapters:
//! - Terminal I/O over any `Read`/`Write` pair (stdin/stdout, serial devices)
//! - Scripted terminal for replaying a fixed input session in memory
//!
//! Based on cli.c
//! Depends on the Entities layer.

pub mod terminal;
pub mod scripted;

pub use terminal::TerminalIo;
pub use scripted::ScriptedTerminal;
