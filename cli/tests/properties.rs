//! # Response Selection Property Tests
//!
//! File: cli/tests/properties.rs
//!
//! ## Overview
//!
//! Library-level tests of the selection and loading rules, driven through
//! the public API with on-disk source files.
//!

mod common;
use common::{workdir, write_file};
use responder::responder::{
    DefaultResponses, InputWordSet, Responder, Sources, TriggerTable, FALLBACK_RESPONSE,
};
use std::collections::HashMap;

fn words(list: &[&str]) -> InputWordSet {
    list.iter().copied().collect()
}

#[test]
fn test_every_registered_word_returns_its_response() {
    let table = TriggerTable::builtin();
    let expected: Vec<(String, String)> = table
        .words()
        .into_iter()
        .map(|w| (w.to_string(), table.get(w).unwrap().to_string()))
        .collect();
    let mut responder = Responder::new(table, DefaultResponses::default());

    for (word, response) in expected {
        assert_eq!(responder.generate_response(&words(&[word.as_str()])), response);
    }
}

#[test]
fn test_trigger_file_record_maps_all_words() {
    let dir = workdir();
    let path = write_file(
        dir.path(),
        "keyvalue.txt",
        "crash, crashes\nWell, it never...\nmore.\n\n",
    );

    let mut table = TriggerTable::new();
    assert_eq!(table.extend_from_file(&path).unwrap(), 1);

    assert_eq!(table.get("crash"), Some("Well, it never... more."));
    assert_eq!(table.get("crashes"), Some("Well, it never... more."));
}

#[test]
fn test_default_file_three_blank_lines() {
    let dir = workdir();
    let path = write_file(
        dir.path(),
        "default.txt",
        "First one.\n\n\n\nSecond\none.\n",
    );

    let (defaults, error) = DefaultResponses::load(&path);

    assert!(error.is_none());
    assert_eq!(defaults.as_slice(), ["First one.", "Second one."]);
}

#[test]
fn test_unmatched_input_returns_parsed_default() {
    let dir = workdir();
    let path = write_file(
        dir.path(),
        "default.txt",
        "Hi there.\n\nHow are you?\nFine, thanks.\n\n",
    );
    let sources = Sources {
        defaults: Some(path),
        ..Default::default()
    };
    let mut responder = Responder::from_sources(&sources);

    for _ in 0..100 {
        let response = responder.generate_response(&words(&["nothing", "matches"]));
        assert!(response == "Hi there." || response == "How are you? Fine, thanks.");
    }
}

#[test]
fn test_missing_defaults_always_fall_back() {
    let dir = workdir();
    let sources = Sources {
        defaults: Some(dir.path().join("default.txt")),
        ..Default::default()
    };
    let mut responder = Responder::from_sources(&sources);

    assert_eq!(responder.defaults().as_slice(), [FALLBACK_RESPONSE]);
    for _ in 0..20 {
        assert_eq!(responder.generate_response(&words(&["hello"])), FALLBACK_RESPONSE);
    }
}

#[test]
fn test_fallback_frequencies_are_uniform() {
    let defaults = DefaultResponses::parse("a\n\nb\n\nc\n\nd\n\ne");
    // Entropy-seeded on purpose; the band is wide enough for any seed.
    let mut responder = Responder::new(TriggerTable::new(), defaults);
    let trials = 10_000;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..trials {
        *counts
            .entry(responder.generate_response(&InputWordSet::new()).to_string())
            .or_default() += 1;
    }

    assert_eq!(counts.len(), 5);
    for count in counts.values() {
        assert!((1600..=2400).contains(count), "count {count} outside expected band");
    }
}
