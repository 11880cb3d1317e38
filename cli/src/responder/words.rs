//! # Input Word Sets
//!
//! File: cli/src/responder/words.rs
//!
//! The per-request input of the selector: a deduplicated set of words.
//!
//! The set is backed by a `BTreeSet`, so iteration is lexicographic. That
//! order is fixed by this type and cannot be influenced by the caller, which
//! keeps "first trigger found wins" deterministic when more than one input
//! word is a trigger.
//!
use std::collections::BTreeSet;

/// A deduplicated set of input words, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputWordSet {
    words: BTreeSet<String>,
}

impl InputWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for InputWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for InputWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}
