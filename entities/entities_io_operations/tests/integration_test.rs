//! Integration tests for entities_io_operations crate
//!
//! These tests verify the trait contracts through generic callers.

use entities_io_operations::*;

fn emit_all<S: CharSink>(sink: &mut S, parts: &[&str]) {
    for part in parts {
        sink.write_str(part);
    }
}

#[test]
fn test_generic_caller_with_string() {
    let mut out = String::new();
    emit_all(&mut out, &["-", "1a", "2b"]);
    assert_eq!(out, "-1a2b");
}

#[test]
fn test_generic_caller_with_borrowed_sink() {
    let mut out = Vec::new();
    let borrowed = &mut out;
    emit_all(&mut &mut *borrowed, &["ff"]);
    assert_eq!(out, b"ff");
}
