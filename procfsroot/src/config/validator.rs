//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use procfsroot::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_jumps: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(max_jumps) = config.max_jumps {
            if max_jumps == 0 {
                return Err(Error::Validation {
                    field: "max_jumps".into(),
                    message: "Jump ceiling must be at least 1".into(),
                });
            }
        }

        if let Some(ref procfs) = config.procfs {
            if !procfs.is_absolute() {
                return Err(Error::Validation {
                    field: "procfs".into(),
                    message: format!("procfs mount point must be absolute: {}", procfs.display()),
                });
            }
        }

        Ok(())
    }
}
