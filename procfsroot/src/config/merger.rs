//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use procfsroot::config::{Config, ConfigMerger};
///
/// let low = Config { max_jumps: Some(10), ..Default::default() };
/// let high = Config { max_jumps: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_jumps, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_jumps.is_some() {
            target.max_jumps = source.max_jumps;
        }

        if source.procfs.is_some() {
            target.procfs.clone_from(&source.procfs);
        }

        if source.except_last.is_some() {
            target.except_last = source.except_last;
        }
    }
}
