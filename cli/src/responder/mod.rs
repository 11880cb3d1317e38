//! # Responder Core
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! This module holds the response-selection core. A `Responder` is built once
//! from two read-only tables and then queried once per user turn:
//!
//! - **`TriggerTable`** (`triggers`): trigger word → canned response.
//! - **`DefaultResponses`** (`defaults`): fallback responses, never empty.
//! - **`InputWordSet`** (`words`): the words of one user turn.
//!
//! ## Selection
//!
//! `generate_response` walks the word set in its own (lexicographic) order and
//! returns the response of the first word found in the trigger table. If no
//! word matches, it picks a default response uniformly at random. The random
//! generator is owned by the `Responder`, created once and never reseeded, so
//! successive calls continue a single random sequence.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let mut responder = Responder::new(TriggerTable::builtin(), DefaultResponses::default());
//! let words: InputWordSet = ["my", "linux", "box"].into_iter().collect();
//! println!("{}", responder.generate_response(&words));
//! ```
//!
use crate::core::error::ResponderError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub mod defaults;
pub mod triggers;
pub mod words;

pub use defaults::{DefaultResponses, FALLBACK_RESPONSE};
pub use triggers::TriggerTable;
pub use words::InputWordSet;

/// Where the two tables are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    /// Trigger file. `None` selects the built-in trigger table.
    pub triggers: Option<PathBuf>,
    /// Load the built-in groups before the trigger file, letting the file
    /// override them. Ignored when `triggers` is `None`.
    pub include_builtin: bool,
    /// Default responses file. `None` leaves only the fallback response.
    pub defaults: Option<PathBuf>,
    /// Fixed seed for the fallback picker; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

/// Keyword-triggered response generator.
#[derive(Debug, Clone)]
pub struct Responder {
    triggers: TriggerTable,
    defaults: DefaultResponses,
    rng: StdRng,
}

impl Responder {
    /// Creates a responder whose random generator is seeded from the OS.
    pub fn new(triggers: TriggerTable, defaults: DefaultResponses) -> Self {
        Self {
            triggers,
            defaults,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a responder with a reproducible fallback sequence.
    pub fn with_seed(triggers: TriggerTable, defaults: DefaultResponses, seed: u64) -> Self {
        Self {
            triggers,
            defaults,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Loads both tables from `sources` and builds a responder.
    ///
    /// Load problems never abort construction: a missing trigger file leaves
    /// the table with whatever it held before the file was read, and the
    /// default list always contains at least the fallback. The problems are
    /// returned so the caller can report them.
    pub fn load(sources: &Sources) -> (Self, Vec<ResponderError>) {
        let mut problems = Vec::new();
        let triggers = load_triggers(sources, &mut problems);
        let defaults = match &sources.defaults {
            Some(path) => {
                let (defaults, error) = DefaultResponses::load(path);
                problems.extend(error);
                defaults
            }
            None => DefaultResponses::default(),
        };
        info!(
            "Responder ready: {} trigger words, {} default responses",
            triggers.len(),
            defaults.len()
        );
        let responder = match sources.seed {
            Some(seed) => Self::with_seed(triggers, defaults, seed),
            None => Self::new(triggers, defaults),
        };
        (responder, problems)
    }

    /// Like [`Responder::load`], logging each load problem as a warning.
    pub fn from_sources(sources: &Sources) -> Self {
        let (responder, problems) = Self::load(sources);
        for problem in &problems {
            warn!("{}", problem);
        }
        responder
    }

    /// Generates the response for one set of input words.
    pub fn generate_response(&mut self, words: &InputWordSet) -> &str {
        if let Some(response) = words.iter().find_map(|word| self.triggers.get(word)) {
            debug!("Trigger matched for input {:?}", words);
            return response;
        }
        debug!("No trigger in {:?}, picking a default response", words);
        self.defaults.pick(&mut self.rng)
    }

    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    pub fn defaults(&self) -> &DefaultResponses {
        &self.defaults
    }
}

fn load_triggers(sources: &Sources, problems: &mut Vec<ResponderError>) -> TriggerTable {
    let Some(path) = &sources.triggers else {
        return TriggerTable::builtin();
    };
    let mut table = if sources.include_builtin {
        TriggerTable::builtin()
    } else {
        TriggerTable::new()
    };
    if let Err(e) = table.extend_from_file(path) {
        problems.push(e);
    }
    table
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn words(list: &[&str]) -> InputWordSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_single_trigger_returns_exact_response() {
        let triggers = TriggerTable::builtin();
        let expected = triggers.get("linux").unwrap().to_string();
        let mut responder = Responder::with_seed(triggers, DefaultResponses::default(), 1);

        assert_eq!(responder.generate_response(&words(&["linux"])), expected);
        assert_eq!(
            responder.generate_response(&words(&["my", "linux", "box"])),
            expected
        );
    }

    #[test]
    fn test_multiline_response_is_returned_verbatim() {
        let mut responder =
            Responder::with_seed(TriggerTable::builtin(), DefaultResponses::default(), 1);

        let response = responder.generate_response(&words(&["bluej"]));
        assert_eq!(response.lines().count(), 3);
    }

    #[test]
    fn test_unmatched_input_returns_default_member() {
        let defaults = DefaultResponses::parse("Tell me more.\n\nGo on.\n\nWhy?");
        let mut responder = Responder::with_seed(TriggerTable::builtin(), defaults.clone(), 42);

        for _ in 0..50 {
            let response = responder.generate_response(&words(&["hello", "there"]));
            assert!(defaults.iter().any(|d| d == response));
        }
    }

    #[test]
    fn test_empty_input_falls_back() {
        let mut responder =
            Responder::with_seed(TriggerTable::builtin(), DefaultResponses::default(), 3);

        assert_eq!(
            responder.generate_response(&InputWordSet::new()),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn test_multiple_triggers_first_in_set_order_wins() {
        let triggers = TriggerTable::parse("zebra\nStripes.\n\napple\nFruit.\n");
        let mut responder = Responder::with_seed(triggers, DefaultResponses::default(), 5);

        assert_eq!(responder.generate_response(&words(&["zebra", "apple"])), "Fruit.");
    }

    #[test]
    fn test_fallback_distribution_is_roughly_uniform() {
        let defaults = DefaultResponses::parse("one\n\ntwo\n\nthree\n\nfour");
        let mut responder = Responder::with_seed(TriggerTable::new(), defaults, 2024);
        let trials = 8000;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let response = responder.generate_response(&words(&["nothing"])).to_string();
            *counts.entry(response).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (response, count) in counts {
            // Expected 2000 each; allow a generous band.
            assert!((1700..=2300).contains(&count), "{response} picked {count} times");
        }
    }

    #[test]
    fn test_rng_state_persists_across_calls() {
        let defaults = DefaultResponses::parse("a\n\nb\n\nc\n\nd\n\ne\n\nf");
        let mut responder = Responder::with_seed(TriggerTable::new(), defaults, 9);
        let input = words(&["x"]);

        let picks: Vec<String> = (0..20)
            .map(|_| responder.generate_response(&input).to_string())
            .collect();

        // A generator reseeded per call would repeat one value forever.
        assert!(picks.iter().any(|p| p != &picks[0]));
    }

    #[test]
    fn test_from_sources_missing_files() {
        let dir = tempdir().unwrap();
        let sources = Sources {
            triggers: Some(dir.path().join("keyvalue.txt")),
            include_builtin: false,
            defaults: Some(dir.path().join("default.txt")),
            seed: Some(11),
        };

        let mut responder = Responder::from_sources(&sources);

        assert!(responder.triggers().is_empty());
        assert_eq!(responder.defaults().as_slice(), [FALLBACK_RESPONSE]);
        for _ in 0..10 {
            assert_eq!(
                responder.generate_response(&words(&["crash"])),
                FALLBACK_RESPONSE
            );
        }
    }

    #[test]
    fn test_load_reports_problems() {
        let dir = tempdir().unwrap();
        let sources = Sources {
            triggers: Some(dir.path().join("keyvalue.txt")),
            include_builtin: true,
            defaults: Some(dir.path().join("default.txt")),
            seed: None,
        };

        let (responder, problems) = Responder::load(&sources);

        assert_eq!(problems.len(), 2);
        assert!(problems
            .iter()
            .all(|p| matches!(p, ResponderError::FileNotFound { .. })));
        // Built-ins were loaded before the missing file was noticed.
        assert_eq!(responder.triggers(), &TriggerTable::builtin());
    }

    #[test]
    fn test_from_sources_reads_files() {
        let dir = tempdir().unwrap();
        let triggers = dir.path().join("keyvalue.txt");
        let defaults = dir.path().join("default.txt");
        fs::write(&triggers, "crash, crashes\nWell, it never...\nmore.\n\n").unwrap();
        fs::write(&defaults, "Hi there.\n\nHow are you?\nFine, thanks.\n\n").unwrap();

        let sources = Sources {
            triggers: Some(triggers),
            include_builtin: true,
            defaults: Some(defaults),
            seed: None,
        };
        let mut responder = Responder::from_sources(&sources);

        assert_eq!(
            responder.generate_response(&words(&["crashes"])),
            "Well, it never... more."
        );
        assert!(responder.triggers().get("bluej").is_some());
        assert_eq!(responder.defaults().len(), 2);
    }

    #[test]
    fn test_from_sources_without_trigger_file_uses_builtin() {
        let responder = Responder::from_sources(&Sources::default());

        assert_eq!(responder.triggers(), &TriggerTable::builtin());
        assert_eq!(responder.defaults().as_slice(), [FALLBACK_RESPONSE]);
    }
}
