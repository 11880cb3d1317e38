//! # Console Input Tokenizer
//!
//! File: cli/src/common/input.rs
//!
//! ## Overview
//!
//! The responder core performs no tokenization of its own: it receives a
//! ready-made `InputWordSet`. This module is the console side of that
//! contract. It turns one line typed by the user into a word set by trimming,
//! lowercasing and splitting on whitespace. Punctuation is left attached, so
//! `"crash?"` does not match the trigger `"crash"`.
//!
use crate::responder::InputWordSet;

/// Splits a line of user input into a deduplicated, lowercase word set.
pub fn tokenize(line: &str) -> InputWordSet {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
