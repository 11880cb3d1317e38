//! # Default Responses
//!
//! File: cli/src/responder/defaults.rs
//!
//! ## Overview
//!
//! Default responses are what the selector says when none of the input words
//! is a trigger. They are loaded from a flat text file in which blank lines
//! separate responses and consecutive non-blank lines belong to the same
//! response:
//!
//! ```text
//! That sounds interesting. Tell me more...
//!
//! Could you describe
//! the problem in more detail?
//! ```
//!
//! The lines of one response are joined with a single space and the result is
//! trimmed, giving `"Could you describe the problem in more detail?"` for the
//! second entry above. Runs of blank lines never produce empty entries, and a
//! final response without a trailing blank line is still captured.
//!
//! A `DefaultResponses` list is never empty. Whenever a source yields no
//! entries (missing file, read failure, empty file) the list holds exactly
//! [`FALLBACK_RESPONSE`].
//!
use crate::common::fs::io::open_buffered;
use crate::core::error::ResponderError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::debug;

/// The response used when no default responses could be loaded.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Non-empty, ordered list of fallback responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResponses {
    responses: Vec<String>,
}

impl Default for DefaultResponses {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl DefaultResponses {
    /// Wraps `responses`, seeding the fallback if the list is empty.
    pub fn from_vec(mut responses: Vec<String>) -> Self {
        if responses.is_empty() {
            responses.push(FALLBACK_RESPONSE.to_string());
        }
        Self { responses }
    }

    /// Parses default responses from in-memory text.
    pub fn parse(text: &str) -> Self {
        let mut responses = Vec::new();
        let mut parser = ResponseParser::default();
        for line in text.lines() {
            responses.extend(parser.feed(line));
        }
        responses.extend(parser.finish());
        Self::from_vec(responses)
    }

    /// Reads default responses from `reader`.
    ///
    /// On a read error the responses completed before the failure are
    /// returned alongside the error, so the caller can keep them.
    pub fn from_reader<R: BufRead>(reader: R) -> (Self, Option<io::Error>) {
        let mut responses = Vec::new();
        let error = read_responses(reader, &mut responses).err();
        (Self::from_vec(responses), error)
    }

    /// Loads default responses from the file at `path`.
    ///
    /// Loading never fails outright: the returned list is always usable, and
    /// any problem is handed back for the caller to report.
    pub fn load(path: &Path) -> (Self, Option<ResponderError>) {
        let reader = match open_buffered(path) {
            Ok(reader) => reader,
            Err(e) => return (Self::default(), Some(e)),
        };
        let (responses, error) = Self::from_reader(reader);
        debug!("Loaded {} default responses from {:?}", responses.len(), path);
        let error = error.map(|source| ResponderError::ReadFailure {
            path: path.to_path_buf(),
            source,
        });
        (responses, error)
    }

    /// Picks one response uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.responses
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_RESPONSE)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.responses
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(String::as_str)
    }
}

fn read_responses<R: BufRead>(reader: R, responses: &mut Vec<String>) -> io::Result<()> {
    let mut parser = ResponseParser::default();
    for line in reader.lines() {
        responses.extend(parser.feed(&line?));
    }
    responses.extend(parser.finish());
    Ok(())
}

/// Two-state parser: idle between responses, accumulating inside one.
#[derive(Debug, Default)]
enum ResponseParser {
    #[default]
    Idle,
    Accumulating(Vec<String>),
}

impl ResponseParser {
    fn feed(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return std::mem::take(self).finish();
        }
        match self {
            ResponseParser::Idle => {
                *self = ResponseParser::Accumulating(vec![line.to_string()]);
            }
            ResponseParser::Accumulating(lines) => lines.push(line.to_string()),
        }
        None
    }

    fn finish(self) -> Option<String> {
        match self {
            ResponseParser::Idle => None,
            ResponseParser::Accumulating(lines) => {
                let response = lines.join(" ").trim().to_string();
                (!response.is_empty()).then_some(response)
            }
        }
    }
}
