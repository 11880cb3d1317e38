//! # Responder Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that sit around the response-selection core rather than
//! inside it:
//!
//! - **`fs`**: Opening and reading the source text files.
//! - **`input`**: The console tokenizer that turns a typed line into an
//!   `InputWordSet`.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Tokenizing console input into word sets.
pub mod input;
