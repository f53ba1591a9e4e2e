//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use crate::session::SessionConfig;
use clap::Parser;
use infrastructure_hex_encoding::DEFAULT_CHUNK_BYTES;
use thiserror::Error;

/// Hex terminal command-line arguments
#[derive(Parser, Debug)]
#[command(name = "hexterm")]
#[command(about = "Read hex big integers from the terminal and print them back")]
pub struct HexTermArgs {
    /// Stop after this many values (default: until an empty line)
    #[arg(long)]
    pub count: Option<usize>,

    /// Prompt written before each value
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Bytes added to the decode buffer per growth step
    #[arg(long, default_value_t = DEFAULT_CHUNK_BYTES)]
    pub chunk_bytes: usize,

    /// Also print each value in decimal
    #[arg(long)]
    pub decimal: bool,

    /// Do not echo input (use when the terminal already echoes)
    #[arg(long)]
    pub no_echo: bool,

    /// Log decoder activity at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Invalid argument combinations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("--chunk-bytes must be greater than zero")]
    ZeroChunk,
    #[error("--count must be greater than zero")]
    ZeroCount,
}

impl HexTermArgs {
    /// Validate argument values
    pub fn validate(&self) -> Result<(), ArgsError> {
        if self.chunk_bytes == 0 {
            return Err(ArgsError::ZeroChunk);
        }
        if self.count == Some(0) {
            return Err(ArgsError::ZeroCount);
        }
        Ok(())
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Build the session configuration
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            prompt: self.prompt.clone(),
            count: self.count,
            decimal: self.decimal,
            chunk_bytes: self.chunk_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = HexTermArgs::parse_from(["hexterm"]);
        assert_eq!(args.count, None);
        assert_eq!(args.prompt, "> ");
        assert_eq!(args.chunk_bytes, DEFAULT_CHUNK_BYTES);
        assert!(!args.decimal);
        assert!(!args.no_echo);
        assert_eq!(args.log_filter(), "warn");
        assert_eq!(args.validate(), Ok(()));
    }

    #[test]
    fn test_flags() {
        let args = HexTermArgs::parse_from([
            "hexterm",
            "--count",
            "3",
            "--prompt",
            "n: ",
            "--chunk-bytes",
            "8",
            "--decimal",
            "--no-echo",
            "-v",
        ]);
        assert_eq!(args.count, Some(3));
        assert_eq!(args.log_filter(), "debug");

        let config = args.session_config();
        assert_eq!(config.prompt, "n: ");
        assert_eq!(config.count, Some(3));
        assert_eq!(config.chunk_bytes, 8);
        assert!(config.decimal);
    }

    #[test]
    fn test_validate_rejects_zero_chunk() {
        let args = HexTermArgs::parse_from(["hexterm", "--chunk-bytes", "0"]);
        assert_eq!(args.validate(), Err(ArgsError::ZeroChunk));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let args = HexTermArgs::parse_from(["hexterm", "--count", "0"]);
        assert_eq!(args.validate(), Err(ArgsError::ZeroCount));
        assert_eq!(args.validate().unwrap_err().to_string(), "--count must be greater than zero");
    }
}
