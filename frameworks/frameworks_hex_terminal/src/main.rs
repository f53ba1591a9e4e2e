//! Hex Terminal Binary Entry Point
//!
//! Reads hex big integers from stdin with echo and prints their canonical
//! form until an empty entry, end of input, or `--count` values.

use std::process;

use adapters_io_operations::TerminalIo;
use clap::Parser;
use frameworks_hex_terminal::{run_session, HexTermArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = HexTermArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Logs go to stderr so the echoed session on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut term = TerminalIo::stdio().with_echo(!args.no_echo);
    let result = run_session(&mut term, &args.session_config());
    term.flush();

    if let Some(e) = term.take_error() {
        eprintln!("Error: terminal I/O failed: {}", e);
        process::exit(1);
    }

    match result {
        Ok(summary) => {
            tracing::debug!(values = summary.values.len(), cancelled = summary.cancelled, "session finished");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}
