//! # Responder Check Command
//!
//! File: cli/src/commands/check.rs
//!
//! ## Overview
//!
//! `responder check` loads both sources the same way `chat` would and prints
//! a short report: where each table came from, how much was loaded, and any
//! problem hit while loading. Load problems are reported, not fatal, so the
//! command still succeeds when a file is missing.
//!
//! Example output:
//!
//! ```text
//! Triggers: keyvalue.txt (built-ins included)
//!   13 trigger words
//! Defaults: default.txt
//!   7 default responses
//! Problems:
//!   Unable to open keyvalue.txt
//! ```
//!
use super::SourceArgs;
use crate::core::error::Result;
use crate::responder::{Responder, Sources};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Also list every trigger word.
    #[arg(long)]
    pub list_words: bool,
}

pub fn handle_check(args: CheckArgs, source_args: &SourceArgs) -> Result<()> {
    info!("Handling check command...");
    let sources = source_args.resolve()?;
    let (responder, problems) = Responder::load(&sources);

    let mut out = io::stdout().lock();
    write_report(&mut out, &sources, &responder, args.list_words)?;
    if !problems.is_empty() {
        writeln!(out, "Problems:")?;
        for problem in &problems {
            writeln!(out, "  {}", problem)?;
        }
    }
    Ok(())
}

fn write_report<W: Write>(
    out: &mut W,
    sources: &Sources,
    responder: &Responder,
    list_words: bool,
) -> io::Result<()> {
    match &sources.triggers {
        Some(path) if sources.include_builtin => {
            writeln!(out, "Triggers: {} (built-ins included)", path.display())?
        }
        Some(path) => writeln!(out, "Triggers: {}", path.display())?,
        None => writeln!(out, "Triggers: built-in")?,
    }
    writeln!(out, "  {} trigger words", responder.triggers().len())?;
    if list_words {
        for word in responder.triggers().words() {
            writeln!(out, "    {}", word)?;
        }
    }
    match &sources.defaults {
        Some(path) => writeln!(out, "Defaults: {}", path.display())?,
        None => writeln!(out, "Defaults: none")?,
    }
    writeln!(out, "  {} default responses", responder.defaults().len())?;
    Ok(())
}
