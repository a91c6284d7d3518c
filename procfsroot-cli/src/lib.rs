//! Library exports for procfsroot-cli.
//!
//! This module exports the CLI structure so its definition can be checked
//! and reused outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
