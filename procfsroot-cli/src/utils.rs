//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by all commands and the
//! configuration loading used by them.

use crate::error::CliError;
use procfsroot::{Config, ConfigBuilder, Logger};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is carried by the logger
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Logger initialised from the verbosity flags.
    pub logger: Logger,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `overrides` built from command flags (highest priority)
/// 2. Environment variables
/// 3. The `--config` file, then the user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        global
            .logger
            .debug(&format!("Using configuration file {}", path.display()));
        builder = builder.with_config_file(path);
    }

    let config = builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!(
        "Effective configuration: max_jumps={}, procfs={}, handling={}",
        config.max_jumps_or_default(),
        config.procfs_or_default().display(),
        config.path_handling()
    ));
    Ok(config)
}
