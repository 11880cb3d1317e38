//! # Responder Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the responder crate.
//! Two layers are used, following the usual library/application split:
//!
//! - `ResponderError`: a `thiserror` enum for the failures the loaders can
//!   report. Loading a source file either fails to open it (`FileNotFound`),
//!   hits an I/O error part way through (`ReadFailure`), or, at the
//!   application level, finds an invalid configuration (`Config`).
//! - `Result<T>`: an alias for `anyhow::Result<T>` used by configuration
//!   loading and the command handlers, where context matters more than the
//!   concrete error type.
//!
//! Loader failures are never fatal. The loaders hand them back to the caller,
//! which logs them and keeps whatever data was accumulated before the failure.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match table.extend_from_file(path) {
//!     Ok(records) => info!("Loaded {} trigger records", records),
//!     Err(e) => warn!("{}", e), // table keeps what it had
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the responder crate.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// The source file does not exist (or could not be opened).
    #[error("Unable to open {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// An I/O error occurred while reading an already opened source file.
    #[error("A problem was encountered reading {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponderError {
    /// Classifies an I/O error raised while opening `path`.
    ///
    /// `NotFound` becomes `FileNotFound`; anything else (permissions, the path
    /// being a directory, ...) is reported as a `ReadFailure`.
    pub fn from_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ResponderError::FileNotFound { path }
        } else {
            ResponderError::ReadFailure { path, source }
        }
    }
}

/// Type alias for Result using anyhow::Error for application-level code.
pub type Result<T> = anyhow::Result<T>;
