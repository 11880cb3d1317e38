//! # Responder Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `responder` CLI and the
//! source-selection flags they share. The CLI is the console collaborator of
//! the response core: it decides where the source files come from, builds a
//! `Responder` once, and feeds it word sets.
//!
//! ## Commands
//!
//! - `chat`: Interactive session, one response per typed line
//! - `reply`: One-shot response for words given on the command line
//! - `check`: Loads both sources and reports what was found
//!
//! Each command defines its own arguments structure and handler function.
//!
use crate::core::config;
use crate::core::error::Result;
use crate::responder::{Responder, Sources};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Interactive chat session.
pub mod chat;
/// Load report for the configured sources.
pub mod check;
/// One-shot reply for command-line words.
pub mod reply;

/// Flags selecting the source files, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Configuration file to load on top of the user and project configuration.
    #[arg(long, global = true, env = "RESPONDER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Trigger records file (overrides `triggers.file`).
    #[arg(long, global = true, value_name = "FILE")]
    pub triggers: Option<PathBuf>,

    /// Default responses file (overrides `defaults.file`).
    #[arg(long, global = true, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Seed for the fallback picker, for reproducible sessions.
    #[arg(long, global = true, env = "RESPONDER_SEED", value_name = "N")]
    pub seed: Option<u64>,
}

impl SourceArgs {
    /// Resolves the loader sources from configuration plus command-line overrides.
    pub fn resolve(&self) -> Result<Sources> {
        let cfg = config::load_config(self.config.as_deref())
            .context("Failed to load responder configuration")?;
        let mut sources = cfg.to_sources(self.seed);
        if let Some(triggers) = &self.triggers {
            sources.triggers = Some(triggers.clone());
        }
        if let Some(defaults) = &self.defaults {
            sources.defaults = Some(defaults.clone());
        }
        debug!("Resolved sources: {:?}", sources);
        Ok(sources)
    }
}

/// Builds a responder for a command, logging any load problems.
pub fn build_responder(args: &SourceArgs) -> Result<Responder> {
    let sources = args.resolve()?;
    Ok(Responder::from_sources(&sources))
}
