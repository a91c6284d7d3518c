//! Configuration schema definitions.
//!
//! This module defines the configuration structure for procfsroot: the
//! symlink jump ceiling, the procfs mount point and the default handling of
//! the final path component.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::path::{PathHandling, DEFAULT_MAX_JUMPS};

/// Default procfs mount point.
pub const DEFAULT_PROCFS: &str = "/proc";

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be merged; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use procfsroot::config::Config;
///
/// let config = Config {
///     max_jumps: Some(40),
///     ..Default::default()
/// };
/// assert_eq!(config.max_jumps_or_default(), 40);
/// assert_eq!(Config::default().max_jumps_or_default(), 255);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of symlinks followed in a single evaluation.
    pub max_jumps: Option<usize>,

    /// Mount point of the proc filesystem used for PID wormholes.
    pub procfs: Option<PathBuf>,

    /// Leave the final path component unresolved by default.
    pub except_last: Option<bool>,
}

impl Config {
    /// The configured jump ceiling, or [`DEFAULT_MAX_JUMPS`].
    #[must_use]
    pub fn max_jumps_or_default(&self) -> usize {
        self.max_jumps.unwrap_or(DEFAULT_MAX_JUMPS)
    }

    /// The configured procfs mount point, or `/proc`.
    #[must_use]
    pub fn procfs_or_default(&self) -> &Path {
        self.procfs.as_deref().unwrap_or(Path::new(DEFAULT_PROCFS))
    }

    /// The configured final component handling.
    #[must_use]
    pub fn path_handling(&self) -> PathHandling {
        PathHandling::from_except_last(self.except_last.unwrap_or(false))
    }
}
