//! # Responder Reply Command
//!
//! File: cli/src/commands/reply.rs
//!
//! ## Overview
//!
//! `responder reply <WORD>...` prints the response for a single turn. The
//! words are used exactly as given: no lowercasing and no splitting, so
//! `responder reply Linux` does not hit the lowercase `linux` trigger.
//!
//! ```bash
//! responder reply my linux box is slow
//! responder --defaults default.txt --seed 7 reply hello
//! ```
//!
use super::{build_responder, SourceArgs};
use crate::core::error::Result;
use crate::responder::InputWordSet;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ReplyArgs {
    /// Input words for this turn.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

pub fn handle_reply(args: ReplyArgs, sources: &SourceArgs) -> Result<()> {
    info!("Handling reply command for {} word(s)...", args.words.len());
    let mut responder = build_responder(sources)?;
    let words: InputWordSet = args.words.into_iter().collect();
    println!("{}", responder.generate_response(&words));
    Ok(())
}
