//! Core types for symlink evaluation.
//!
//! This module defines how the final path component is handled and the
//! detailed result of a single evaluation.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Tells the evaluator how to treat the final path component.
///
/// All preceding components are always resolved.
///
/// # Examples
///
/// ```
/// use procfsroot::PathHandling;
///
/// assert_eq!(PathHandling::default(), PathHandling::FullPath);
/// assert!(PathHandling::ExceptLast.keeps_last());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathHandling {
    /// Resolve every path component, including the last one.
    #[default]
    FullPath,

    /// Resolve every component except the last one.
    ///
    /// The final component is neither followed nor checked for existence,
    /// which suits working on a symlink itself or on a file that is about
    /// to be created.
    ExceptLast,
}

impl PathHandling {
    /// Returns `true` if the final component is left unresolved.
    #[must_use]
    pub const fn keeps_last(self) -> bool {
        matches!(self, Self::ExceptLast)
    }

    /// Maps an "except last" flag onto a handling mode.
    #[must_use]
    pub const fn from_except_last(except_last: bool) -> Self {
        if except_last {
            Self::ExceptLast
        } else {
            Self::FullPath
        }
    }
}

impl fmt::Display for PathHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullPath => write!(f, "full-path"),
            Self::ExceptLast => write!(f, "except-last"),
        }
    }
}

/// The outcome of evaluating a path relative to a root.
///
/// Paths are kept as raw OS strings. When serialized, non-UTF-8 bytes are
/// replaced lossily.
///
/// # Examples
///
/// ```
/// use procfsroot::path::Evaluation;
/// use std::path::Path;
///
/// let evaluation = Evaluation::new("/a/b.txt".into(), Path::new("/proc/1/root"), 2);
/// assert_eq!(evaluation.path(), "/a/b.txt");
/// assert_eq!(evaluation.host_path(), Path::new("/proc/1/root/a/b.txt"));
/// assert_eq!(evaluation.jumps(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    #[serde(serialize_with = "serialize_lossy")]
    path: OsString,
    #[serde(serialize_with = "serialize_lossy")]
    root: PathBuf,
    #[serde(serialize_with = "serialize_lossy")]
    host_path: PathBuf,
    jumps: usize,
}

impl Evaluation {
    /// Creates a new evaluation result.
    ///
    /// `path` must be canonical and absolute relative to `root`.
    #[must_use]
    pub fn new(path: OsString, root: &Path, jumps: usize) -> Self {
        let host_path = join_root(root, &path);
        Self {
            path,
            root: root.to_path_buf(),
            host_path,
            jumps,
        }
    }

    /// The canonical path, relative to the root and without the root prefix.
    #[must_use]
    pub fn path(&self) -> &OsStr {
        &self.path
    }

    /// The root the path was evaluated against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The canonical path prefixed with the root.
    ///
    /// This is the path to use from the observer's own filesystem view.
    #[must_use]
    pub fn host_path(&self) -> &Path {
        &self.host_path
    }

    /// Number of symbolic links followed.
    #[must_use]
    pub const fn jumps(&self) -> usize {
        self.jumps
    }

    /// Consumes the evaluation, returning the canonical path.
    #[must_use]
    pub fn into_path(self) -> OsString {
        self.path
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Path::new(&self.path).display())
    }
}

fn serialize_lossy<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<OsStr>,
    S: Serializer,
{
    serializer.serialize_str(&value.as_ref().to_string_lossy())
}

/// Prefixes `path` with `root` by plain concatenation.
///
/// A bare "/" yields the root itself.
pub(crate) fn join_root(root: &Path, path: &OsStr) -> PathBuf {
    if path == "/" {
        return root.to_path_buf();
    }
    let mut joined = OsString::from(root.as_os_str());
    joined.push(path);
    PathBuf::from(joined)
}
