//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PROCFSROOT_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the symlink jump ceiling.
pub const ENV_MAX_JUMPS: &str = "PROCFSROOT_MAX_JUMPS";

/// Overrides the procfs mount point.
pub const ENV_PROCFS: &str = "PROCFSROOT_PROCFS";

/// Overrides the default final component handling.
pub const ENV_EXCEPT_LAST: &str = "PROCFSROOT_EXCEPT_LAST";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use procfsroot::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all `PROCFSROOT_*` environment variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric jump ceiling, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_MAX_JUMPS) {
            config.max_jumps = Some(val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_JUMPS.into(),
                message: format!("Must be a non-negative integer, got '{val}'"),
            })?);
        }

        if let Ok(val) = env::var(ENV_PROCFS) {
            if !val.is_empty() {
                config.procfs = Some(PathBuf::from(val));
            }
        }

        if let Ok(val) = env::var(ENV_EXCEPT_LAST) {
            config.except_last = Some(Self::parse_bool(ENV_EXCEPT_LAST, &val)?);
        }

        Ok(())
    }

    /// Parse boolean from string (case-insensitive).
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
