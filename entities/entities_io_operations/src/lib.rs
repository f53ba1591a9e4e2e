//! Entities Layer: I/O Operations
//!
//! Provides the character I/O contracts used by the hex codec to talk to a
//! terminal session.
//!
//! ## Overview
//!
//! The `entities_io_operations` crate is part of the entities layer in the CLEAN
//! architecture implementation. It only defines the interfaces; concrete
//! terminals live in the adapters layer.
//!
//! ## Modules
//!
//! - **[`char_io`](char_io/index.html)**: `CharSink` for character output and
//!   `EchoSource` for blocking, echoing character input.
//!
//! ## Usage
//!
//! ```rust
//! use entities_io_operations::CharSink;
//!
//! let mut out = String::new();
//! out.write_char(b'-');
//! out.write_str("ff");
//! assert_eq!(out, "-ff");
//! ```
//!
//! ## See Also
//!
//! - [`entities_bigint`](../entities_bigint/index.html): Values written and read through these traits

pub mod char_io;

pub use char_io::{CharSink, EchoSource};
