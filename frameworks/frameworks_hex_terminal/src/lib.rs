//! Frameworks Layer: Hex Terminal
//!
//! Wires the hex codec to a real terminal:
//! - Command-line configuration (`args`)
//! - Read/print session loop (`session`)
//!
//! The `hexterm` binary in `main.rs` installs logging and runs a session on
//! stdin/stdout.

pub mod args;
pub mod session;

pub use args::{ArgsError, HexTermArgs};
pub use session::{run_session, SessionConfig, SessionError, SessionSummary};
