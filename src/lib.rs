/*!
 * # Reblocker - SRT transcript block merger
 *
 * A Rust library for merging fragmented SRT subtitle entries into fewer,
 * longer-duration blocks, for generating readable transcripts from subtitle
 * tracks.
 *
 * ## Features
 *
 * - Parse SRT subtitle files into timed entries
 * - Greedily merge consecutive entries until a target duration is reached
 * - Collapse multi-line entry text and strip trailing ellipses
 * - Serialize merged blocks back to re-parseable SRT
 * - Process single files or whole directories
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: SRT parsing and serialization
 * - `block_merger`: Merging entries into transcript blocks
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod block_merger;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use block_merger::{BlockMerger, MergedBlock};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use errors::{AppError, ConfigError, ParseError};
