//! # Responder Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `responder chat` runs an interactive support session on the terminal.
//! Each line the user types is tokenized into a word set (trimmed,
//! lowercased, split on whitespace) and answered with the responder's reply,
//! printed verbatim including any embedded line breaks.
//!
//! The session ends when the user types `bye` (any case) or input reaches
//! end-of-file.
//!
//! ```bash
//! responder chat
//! responder --triggers keyvalue.txt --defaults default.txt chat
//! ```
//!
use super::{build_responder, SourceArgs};
use crate::common::input::tokenize;
use crate::core::error::Result;
use crate::responder::Responder;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Prompt printed before each line of input.
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

pub fn handle_chat(args: ChatArgs, sources: &SourceArgs) -> Result<()> {
    info!("Handling chat command...");
    let mut responder = build_responder(sources)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut responder, stdin.lock(), &mut stdout, &args.prompt)?;
    Ok(())
}

/// Drives one session over arbitrary input and output streams.
pub fn run_session<R: BufRead, W: Write>(
    responder: &mut Responder,
    input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()> {
    writeln!(output, "Welcome to the technical support system.")?;
    writeln!(output, "Please tell us about your problem.")?;
    writeln!(output, "Type 'bye' to exit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed, ending session");
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("bye") {
            break;
        }

        let words = tokenize(&line);
        writeln!(output, "{}", responder.generate_response(&words))?;
    }

    writeln!(output, "Nice talking to you. Bye...")?;
    Ok(())
}
