//! # Trigger Table
//!
//! File: cli/src/responder/triggers.rs
//!
//! ## Overview
//!
//! The trigger table maps a trigger word to the canned response it produces.
//! Lookups are exact and case-sensitive; registering a word twice replaces the
//! earlier response (last write wins).
//!
//! The table can be filled from two sources:
//!
//! - **Built-in groups** (`TriggerTable::builtin`): a fixed list of
//!   `(words, response)` pairs whose responses keep their embedded line breaks.
//! - **Trigger files** (`TriggerTable::extend_from_file`): plain text made of
//!   records separated by blank lines. The first line of a record is a
//!   comma-separated list of trigger words; the remaining lines form the
//!   response body.
//!
//! ## File format
//!
//! ```text
//! crash, crashes
//! Well, it never crashes on our system. It must have something
//! to do with your system. Tell me more about your configuration.
//!
//! slow
//! I think this has to do with your hardware.
//! ```
//!
//! Body lines are joined with a single space and the result is trimmed, so the
//! first record above maps both `crash` and `crashes` to one line of text.
//! Lines containing only whitespace count as blank. A record without any body
//! line is skipped, and the last record is kept even when the file does not
//! end with a blank line.
//!
use crate::common::fs::io::open_buffered;
use crate::core::error::ResponderError;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{debug, trace};

/// Word → response mapping consulted by the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerTable {
    responses: HashMap<String, String>,
}

impl TriggerTable {
    /// Creates an empty table. Every request against it falls through to the
    /// default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in keyword groups.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (words, response) in BUILTIN_GROUPS {
            table.insert_group(words.iter().copied(), response);
        }
        debug!("Built-in trigger table holds {} words", table.len());
        table
    }

    /// Registers `response` under every word in `words`.
    pub fn insert_group<I, S>(&mut self, words: I, response: &str)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.responses.insert(word.into(), response.to_string());
        }
    }

    /// Parses trigger records from in-memory text.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        let mut parser = RecordParser::default();
        for line in text.lines() {
            if let Some(record) = parser.feed(line) {
                table.insert_record(record);
            }
        }
        if let Some(record) = parser.finish() {
            table.insert_record(record);
        }
        table
    }

    /// Reads trigger records from `reader` and adds them to the table.
    ///
    /// Returns the number of records registered. If reading fails part way
    /// through, the records completed before the failure stay in the table and
    /// the unfinished record is discarded.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut parser = RecordParser::default();
        let mut records = 0;
        for line in reader.lines() {
            if let Some(record) = parser.feed(&line?) {
                self.insert_record(record);
                records += 1;
            }
        }
        if let Some(record) = parser.finish() {
            self.insert_record(record);
            records += 1;
        }
        Ok(records)
    }

    /// Reads trigger records from the file at `path` and adds them to the table.
    ///
    /// # Errors
    ///
    /// - `ResponderError::FileNotFound` if the file is missing. The table is
    ///   left unchanged.
    /// - `ResponderError::ReadFailure` if reading fails. Records completed
    ///   before the failure are kept.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, ResponderError> {
        let reader = open_buffered(path)?;
        let records = self
            .extend_from_reader(reader)
            .map_err(|source| ResponderError::ReadFailure {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded {} trigger records from {:?}", records, path);
        Ok(records)
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.responses.get(word).map(String::as_str)
    }

    /// Number of trigger words (not records) in the table.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// All registered trigger words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.responses.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    fn insert_record(&mut self, record: TriggerRecord) {
        trace!("Trigger record {:?}", record.words);
        self.insert_group(record.words, &record.response);
    }
}

/// One complete record from a trigger file.
#[derive(Debug, PartialEq, Eq)]
struct TriggerRecord {
    words: Vec<String>,
    response: String,
}

/// Blank-line driven record parser.
///
/// A blank line is the only event that ends a record. Between records the
/// parser waits for a key line; after it, every non-blank line is body text.
#[derive(Debug, Default)]
enum RecordParser {
    #[default]
    AwaitingKey,
    AccumulatingBody {
        words: Vec<String>,
        body: Vec<String>,
    },
}

impl RecordParser {
    /// Consumes one line, returning a record when the line completes one.
    fn feed(&mut self, line: &str) -> Option<TriggerRecord> {
        if line.trim().is_empty() {
            return std::mem::take(self).finish();
        }
        match self {
            RecordParser::AwaitingKey => {
                *self = RecordParser::AccumulatingBody {
                    words: split_key_line(line),
                    body: Vec::new(),
                };
            }
            RecordParser::AccumulatingBody { body, .. } => body.push(line.to_string()),
        }
        None
    }

    /// Flushes the pending record, if it has both trigger words and a body.
    fn finish(self) -> Option<TriggerRecord> {
        match self {
            RecordParser::AccumulatingBody { words, body }
                if !words.is_empty() && !body.is_empty() =>
            {
                Some(TriggerRecord {
                    words,
                    response: body.join(" ").trim().to_string(),
                })
            }
            _ => None,
        }
    }
}

fn split_key_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

const BUILTIN_GROUPS: &[(&[&str], &str)] = &[
    (
        &["crash", "crashes"],
        "Well, it never crashes on our system. It must have something\n\
         to do with your system. Tell me more about your configuration.",
    ),
    (
        &["slow"],
        "I think this has to do with your hardware. Upgrading your processor\n\
         should solve all performance problems. Have you got a problem with\n\
         our software?",
    ),
    (
        &["performance"],
        "Performance was quite adequate in all our tests. Are you running\n\
         any other processes in the background?",
    ),
    (
        &["bug", "buggy"],
        "Well, you know, all software has some bugs. But our software engineers\n\
         are working very hard to fix them. Can you describe the problem a bit\n\
         further?",
    ),
    (
        &["windows"],
        "This is a known bug to do with the Windows operating system. Please\n\
         report it to Microsoft. There is nothing we can do about this.",
    ),
    (
        &["macintosh"],
        "This is a known bug to do with the Mac operating system. Please\n\
         report it to Apple. There is nothing we can do about this.",
    ),
    (
        &["expensive"],
        "The cost of our product is quite competitive. Have you looked around\n\
         and really compared our features?",
    ),
    (
        &["installation"],
        "The installation is really quite straight forward. We have tons of\n\
         wizards that do all the work for you. Have you read the installation\n\
         instructions?",
    ),
    (
        &["memory"],
        "If you read the system requirements carefully, you will see that the\n\
         specified memory requirements are 1.5 giga byte. You really should\n\
         upgrade your memory. Anything else you want to know?",
    ),
    (
        &["linux"],
        "We take Linux support very seriously. But there are some problems.\n\
         Most have to do with incompatible glibc versions. Can you be a bit\n\
         more precise?",
    ),
    (
        &["bluej"],
        "Ahhh, BlueJ, yes. We tried to buy out those guys long ago, but\n\
         they simply won't sell... Stubborn people they are. Nothing we can\n\
         do about it, I'm afraid.",
    ),
];
