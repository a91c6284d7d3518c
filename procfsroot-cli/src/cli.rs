//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, EvalCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve symbolic links as seen from inside a root directory.
#[derive(Parser)]
#[command(name = "procfsroot")]
#[command(
    version,
    about = "Resolve paths inside /proc/[PID]/root wormholes",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the user configuration
    #[arg(long, value_name = "FILE", global = true, env = "PROCFSROOT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path relative to a root directory or process
    Eval(EvalCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
