//! # Responder Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `responder` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session with the built-in triggers
//! responder chat
//!
//! # One-shot reply using file-backed tables, with debug logging
//! responder -vv --triggers keyvalue.txt --defaults default.txt reply my linux box
//!
//! # Show what would be loaded
//! responder check --list-words
//! ```
//!
use clap::{Parser, Subcommand};
use responder::commands::{self, SourceArgs};
use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "responder",
    about = "Keyword-triggered canned response generator",
    long_about = "Answers each turn with the canned response of the first trigger word found,\n\
                  or a random default response when no trigger matches.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    sources: SourceArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session.
    Chat(commands::chat::ChatArgs),
    /// Print the response for the given words.
    #[command(alias = "r")]
    Reply(commands::reply::ReplyArgs),
    /// Load the sources and report what was found.
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cli.sources),
        Commands::Reply(args) => commands::reply::handle_reply(args, &cli.sources),
        Commands::Check(args) => commands::check::handle_check(args, &cli.sources),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
