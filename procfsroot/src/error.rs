//! Error types for the procfsroot library.
//!
//! This module provides the error hierarchy for symlink evaluation and the
//! configuration layer, using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a procfsroot error.
///
/// # Examples
///
/// ```
/// use procfsroot::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b.txt".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the procfsroot library.
///
/// The first five variants are the ways a single evaluation can fail; the
/// remaining ones belong to root handling and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A ".." tried to climb above the enforced root.
    ///
    /// This is raised both for literal ".." components and for relative
    /// symlink targets that contain enough ".." to leave the root.
    #[error("no parent directory: {} climbs above the root", path.display())]
    NoParentDirectory {
        /// The path being evaluated when the breach happened.
        path: PathBuf,
    },

    /// More symbolic links were followed than the configured ceiling allows.
    #[error("too many symlinks (more than {limit}) at {}", path.display())]
    TooManySymlinks {
        /// The symlink that would have exceeded the ceiling.
        path: PathBuf,
        /// The ceiling in effect.
        limit: usize,
    },

    /// A symbolic link with an empty target was encountered.
    #[error("rejecting empty symlink {}", path.display())]
    EmptySymlink {
        /// The offending symlink.
        path: PathBuf,
    },

    /// A non-final path component is neither a directory nor a symlink.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The component that cannot be traversed.
        path: PathBuf,
    },

    /// The link inspector failed to query a path.
    #[error("cannot inspect {}: {source}", path.display())]
    Lookup {
        /// The queried path, including the root prefix.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a queried path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use procfsroot::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Lookup {
    ///     path: PathBuf::from("/proc/1/root/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Check if error is an attempt to climb above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use procfsroot::Error;
    ///
    /// let err = Error::NoParentDirectory { path: "/../etc".into() };
    /// assert!(err.is_confinement_breach());
    /// ```
    #[must_use]
    pub fn is_confinement_breach(&self) -> bool {
        matches!(self, Self::NoParentDirectory { .. })
    }

    /// Check if error signals a probable symlink loop.
    #[must_use]
    pub fn is_symlink_loop(&self) -> bool {
        matches!(self, Self::TooManySymlinks { .. })
    }
}
