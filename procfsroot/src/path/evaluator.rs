//! Symlink evaluation relative to an enforced root.
//!
//! This module provides the [`SymlinkEvaluator`] type, which walks a path
//! component by component, following symbolic links as it goes, while
//! interpreting every absolute link target relative to a root directory
//! instead of the host's `/`.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::inspector::{LinkInspector, OsInspector};
use crate::path::normalize::{clean, pop_component, push_component};
use crate::path::types::{join_root, Evaluation, PathHandling};

/// Default ceiling on symlinks followed in a single evaluation.
pub const DEFAULT_MAX_JUMPS: usize = 255;

/// Evaluates symbolic links in paths relative to a root directory.
///
/// Evaluation never produces a path that climbs above the root: a `..` at the
/// root, whether literal or contained in a relative symlink target, fails
/// with [`Error::NoParentDirectory`] instead of being clamped.
///
/// The evaluator holds no per-call state, so a single instance can serve any
/// number of evaluations, concurrently if the inspector allows it.
///
/// # Examples
///
/// ```no_run
/// use procfsroot::path::SymlinkEvaluator;
/// use procfsroot::PathHandling;
///
/// let evaluator = SymlinkEvaluator::new();
/// let path = evaluator
///     .eval("/var/run/docker.sock", "/proc/1/root", PathHandling::FullPath)
///     .unwrap();
/// assert_eq!(path, "/run/docker.sock");
/// ```
#[derive(Debug, Clone)]
pub struct SymlinkEvaluator<I = OsInspector> {
    inspector: I,
    max_jumps: usize,
}

impl Default for SymlinkEvaluator<OsInspector> {
    fn default() -> Self {
        Self {
            inspector: OsInspector,
            max_jumps: DEFAULT_MAX_JUMPS,
        }
    }
}

impl SymlinkEvaluator<OsInspector> {
    /// Create an evaluator backed by the real filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use procfsroot::path::{SymlinkEvaluator, DEFAULT_MAX_JUMPS};
    ///
    /// let evaluator = SymlinkEvaluator::new();
    /// assert_eq!(evaluator.max_jumps(), DEFAULT_MAX_JUMPS);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator backed by the real filesystem, using the jump
    /// ceiling from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_max_jumps(config.max_jumps_or_default())
    }
}

impl<I: LinkInspector> SymlinkEvaluator<I> {
    /// Create an evaluator that queries `inspector` instead of the real
    /// filesystem.
    #[must_use]
    pub fn with_inspector(inspector: I) -> Self {
        Self {
            inspector,
            max_jumps: DEFAULT_MAX_JUMPS,
        }
    }

    /// Configure the maximum number of symlinks followed per evaluation.
    ///
    /// # Examples
    ///
    /// ```
    /// use procfsroot::path::SymlinkEvaluator;
    ///
    /// let evaluator = SymlinkEvaluator::new().with_max_jumps(40);
    /// assert_eq!(evaluator.max_jumps(), 40);
    /// ```
    #[must_use]
    pub fn with_max_jumps(mut self, max_jumps: usize) -> Self {
        self.max_jumps = max_jumps;
        self
    }

    /// The configured jump ceiling.
    #[must_use]
    pub const fn max_jumps(&self) -> usize {
        self.max_jumps
    }

    /// The inspector used for filesystem queries.
    pub const fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Evaluate `path` relative to `root`, returning the canonical path.
    ///
    /// `path` is taken as absolute even without a leading `/`. The returned
    /// path starts with a single `/`, contains neither `.` nor `..`, and does
    /// not include the root prefix. Components are handled as raw bytes, so
    /// names that are not valid UTF-8 pass through unchanged.
    ///
    /// # Errors
    ///
    /// See [`SymlinkEvaluator::evaluate`].
    pub fn eval(
        &self,
        path: impl AsRef<OsStr>,
        root: impl AsRef<Path>,
        handling: PathHandling,
    ) -> Result<OsString> {
        self.evaluate(path, root, handling).map(Evaluation::into_path)
    }

    /// Evaluate `path` relative to `root`, returning the detailed outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A `..` climbs above the root (`NoParentDirectory`)
    /// - More than [`max_jumps`](Self::max_jumps) symlinks are followed
    ///   (`TooManySymlinks`)
    /// - A symlink has an empty target (`EmptySymlink`)
    /// - A non-final component is not a directory (`NotADirectory`)
    /// - The inspector fails, for instance because a component does not
    ///   exist (`Lookup`)
    pub fn evaluate(
        &self,
        path: impl AsRef<OsStr>,
        root: impl AsRef<Path>,
        handling: PathHandling,
    ) -> Result<Evaluation> {
        let path = path.as_ref();
        let root = root.as_ref();
        let mut input = Vec::with_capacity(path.len() + 1);
        if !path.as_bytes().starts_with(b"/") {
            input.push(b'/');
        }
        input.extend_from_slice(path.as_bytes());
        let mut dest = b"/".to_vec();
        let mut jumps = 0;
        let mut start = 1;

        loop {
            while start < input.len() && input[start] == b'/' {
                start += 1;
            }
            let mut end = start;
            while end < input.len() && input[end] != b'/' {
                end += 1;
            }
            if start == end {
                break;
            }

            match &input[start..end] {
                b"." => {
                    start = end;
                    continue;
                }
                b".." => {
                    if dest == b"/" {
                        log::debug!(
                            "refusing to climb above {} while evaluating {}",
                            root.display(),
                            Path::new(path).display()
                        );
                        return Err(Error::NoParentDirectory {
                            path: PathBuf::from(path),
                        });
                    }
                    pop_component(&mut dest);
                    start = end;
                    continue;
                }
                component => push_component(&mut dest, component),
            }

            let is_last = end >= input.len();
            if is_last && handling.keeps_last() {
                break;
            }

            let host = join_root(root, OsStr::from_bytes(&dest));
            let kind = self
                .inspector
                .classify(&host)
                .map_err(|source| Error::Lookup {
                    path: host.clone(),
                    source,
                })?;
            if !kind.is_symlink() {
                if !kind.is_dir() && !is_last {
                    return Err(Error::NotADirectory { path: host });
                }
                start = end;
                continue;
            }

            jumps += 1;
            if jumps > self.max_jumps {
                return Err(Error::TooManySymlinks {
                    path: host,
                    limit: self.max_jumps,
                });
            }
            let target = self
                .inspector
                .read_link(&host)
                .map_err(|source| Error::Lookup {
                    path: host.clone(),
                    source,
                })?;
            let target = target.as_os_str().as_bytes();
            if target.is_empty() {
                return Err(Error::EmptySymlink { path: host });
            }
            log::trace!(
                "following {} -> {}",
                host.display(),
                Path::new(OsStr::from_bytes(target)).display()
            );

            let mut rewritten = Vec::with_capacity(target.len() + input.len() - end);
            rewritten.extend_from_slice(target);
            rewritten.extend_from_slice(&input[end..]);
            if target.starts_with(b"/") {
                // Absolute targets may still carry "." and "..", so restart
                // the walk on the rewritten input from the root.
                dest = b"/".to_vec();
                start = 1;
            } else {
                pop_component(&mut dest);
                start = 0;
            }
            input = rewritten;
        }

        let canonical = clean(OsStr::from_bytes(&dest))?;
        log::debug!(
            "evaluated {} to {} inside {} after {jumps} symlink(s)",
            Path::new(path).display(),
            Path::new(&canonical).display(),
            root.display()
        );
        Ok(Evaluation::new(canonical, root, jumps))
    }
}

/// Evaluate `path` relative to `root` against the real filesystem.
///
/// Convenience wrapper around [`SymlinkEvaluator::new`] followed by
/// [`SymlinkEvaluator::eval`], using the default jump ceiling.
///
/// # Errors
///
/// See [`SymlinkEvaluator::evaluate`].
///
/// # Examples
///
/// ```no_run
/// use procfsroot::{eval_symlinks, PathHandling};
///
/// // The last component need not exist when it is kept as is.
/// let path = eval_symlinks("/var/run/something", "/proc/self/root", PathHandling::ExceptLast)
///     .unwrap();
/// assert_eq!(path, "/run/something");
///
/// // Climbing out of the root fails instead of clamping.
/// let err = eval_symlinks("/../../../bin/hostbinary", "/proc/self/root", PathHandling::FullPath)
///     .unwrap_err();
/// assert!(err.is_confinement_breach());
/// ```
pub fn eval_symlinks(
    path: impl AsRef<OsStr>,
    root: impl AsRef<Path>,
    handling: PathHandling,
) -> Result<OsString> {
    SymlinkEvaluator::new().eval(path, root, handling)
}
