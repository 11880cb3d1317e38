//! # Responder Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! A keyword-triggered response generator. Given the words of one user turn,
//! it returns the canned response of the first trigger word it recognises,
//! or a randomly chosen default response when none match.
//!
//! The library exposes the response core (`responder`), the configuration and
//! error infrastructure (`core`), shared I/O helpers (`common`) and the CLI
//! subcommands (`commands`) used by the `responder` binary.
//!
//! ```rust
//! use responder::responder::{DefaultResponses, InputWordSet, Responder, TriggerTable};
//!
//! let triggers = TriggerTable::parse("crash, crashes\nWell, it never...\nmore.\n");
//! let defaults = DefaultResponses::parse("Tell me more.\n");
//! let mut bot = Responder::with_seed(triggers, defaults, 7);
//!
//! let words: InputWordSet = ["it", "crashes"].into_iter().collect();
//! assert_eq!(bot.generate_response(&words), "Well, it never... more.");
//!
//! let words: InputWordSet = ["hello"].into_iter().collect();
//! assert_eq!(bot.generate_response(&words), "Tell me more.");
//! ```
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod responder;
