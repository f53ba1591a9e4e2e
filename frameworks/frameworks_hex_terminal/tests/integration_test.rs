//! Integration tests for frameworks_hex_terminal crate
//!
//! These tests run whole sessions over a byte-stream terminal.

use adapters_io_operations::TerminalIo;
use clap::Parser;
use frameworks_hex_terminal::*;
use entities_bigint::BigInt;

#[test]
fn test_session_from_parsed_args() {
    let args = HexTermArgs::parse_from(["hexterm", "--prompt", "", "--count", "2", "--no-echo"]);
    args.validate().unwrap();

    let input = format!("{}\r-1\r7\r", "f".repeat(70));
    let mut term = TerminalIo::new(input.as_bytes(), Vec::new()).with_echo(!args.no_echo);
    let summary = run_session(&mut term, &args.session_config()).unwrap();

    assert_eq!(summary.values.len(), 2);
    assert_eq!(summary.values[1], BigInt::from_i64(-1));
    let (rest, out) = term.into_inner();
    assert_eq!(rest, b"7\r");
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, format!("\r\n= {}\r\n\r\n= -1\r\n", "f".repeat(70)));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let mut term = TerminalIo::new(&b"abc"[..], Vec::new());
    let summary = run_session(&mut term, &SessionConfig::default()).unwrap();
    assert_eq!(summary.values, vec![BigInt::from_u64(0xabc)]);
    assert!(summary.cancelled);
}

#[test]
fn test_session_error_message() {
    let err = SessionError::Decode {
        read: 3,
        source: infrastructure_hex_encoding::DecodeError::MemoryExhausted { requested: 32 },
    };
    assert_eq!(
        err.to_string(),
        "decode failed after 3 value(s): out of memory while growing decode buffer by 32 bytes"
    );
}
