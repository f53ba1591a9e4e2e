//! Session Module
//!
//! Runs the interactive loop: prompt, read a value with echo, print it back
//! in canonical hex. An empty entry ends the session.

use entities_bigint::BigInt;
use entities_io_operations::EchoSource;
use infrastructure_hex_encoding::{DecodeError, HexDecoder, HexEncoder, DEFAULT_CHUNK_BYTES};
use malachite::Integer;
use thiserror::Error;
use tracing::info;

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Written before each value
    pub prompt: String,
    /// Stop after this many values
    pub count: Option<usize>,
    /// Also print decimal
    pub decimal: bool,
    /// Decode buffer growth step in bytes
    pub chunk_bytes: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            count: None,
            decimal: false,
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}

/// What a finished session did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Values read, in order
    pub values: Vec<BigInt>,
    /// True if the session ended on an empty entry
    pub cancelled: bool,
}

/// Session failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("decode failed after {read} value(s): {source}")]
    Decode {
        read: usize,
        #[source]
        source: DecodeError,
    },
}

/// Run a read/print session on `io`
pub fn run_session<T: EchoSource + ?Sized>(
    io: &mut T,
    config: &SessionConfig,
) -> Result<SessionSummary, SessionError> {
    let mut decoder = HexDecoder::new().with_chunk_bytes(config.chunk_bytes);
    let mut summary = SessionSummary::default();

    while config.count.map_or(true, |n| summary.values.len() < n) {
        io.write_str(&config.prompt);
        let value = match decoder.decode_value(io) {
            Ok(Some(value)) => value,
            Ok(None) => {
                io.write_str("\r\n");
                summary.cancelled = true;
                break;
            }
            Err(source) => {
                return Err(SessionError::Decode {
                    read: summary.values.len(),
                    source,
                })
            }
        };

        io.write_str("\r\n= ");
        HexEncoder::encode(&value, io);
        if config.decimal {
            io.write_str(" (");
            io.write_str(&Integer::from(&value).to_string());
            io.write_str(")");
        }
        io.write_str("\r\n");

        info!(
            words = value.length_words(),
            growths = decoder.last_growths(),
            "value read"
        );
        summary.values.push(value);
    }
    Ok(summary)
}
