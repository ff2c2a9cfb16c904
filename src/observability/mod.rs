//! Structured logging with a size-rotated log file.
//!
//! All modules log through `tracing` macros. This module installs the
//! subscriber that filters and writes those events:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → topten.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Events written to `<data_dir>/topten.log`, never to
//!   stdout, so the binary's own output stays clean
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use topten::observability::init_tracing;
//! use topten::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("session started");
//! ```

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
