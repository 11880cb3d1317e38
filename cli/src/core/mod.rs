//! # Responder Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the library and the binary:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ResponderError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
