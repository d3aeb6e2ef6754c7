/*!
 * Error types for the reblocker application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing SRT content
#[derive(Error, Debug)]
pub enum ParseError {
    /// A block ended (or the file ended) before its timing line was seen
    #[error("block {block}: missing timing line")]
    MissingTimingLine {
        /// 1-based position of the block in the input
        block: usize,
    },

    /// The timing line did not match `HH:MM:SS,mmm --> HH:MM:SS,mmm`
    #[error("block {block}: invalid timing line: '{line}'")]
    InvalidTimingLine {
        /// 1-based position of the block in the input
        block: usize,
        /// The offending line
        line: String,
    },

    /// The index line was not a positive integer
    #[error("block {block}: index is not a positive integer: '{line}'")]
    InvalidIndex {
        /// 1-based position of the block in the input
        block: usize,
        /// The offending line
        line: String,
    },
}

/// Errors from invalid reblocking parameters
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A target block duration of zero would make grouping undefined
    #[error("target block duration must be positive")]
    ZeroBlockDuration,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from SRT parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from reblocking configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
