//! # Responder Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the loaders and the configuration system.
//! Everything currently lives in the `io` submodule; import from there
//! (e.g. `crate::common::fs::io::open_buffered`).
//!

/// Basic file input operations (`open_buffered`, `read_file_to_string`).
pub mod io;
