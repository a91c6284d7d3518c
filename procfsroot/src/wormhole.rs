//! Views into another mount namespace through procfs.
//!
//! On Linux, `/proc/<pid>/root` is a "wormhole" into the filesystem as seen by
//! process `<pid>`. Opening a path below it works, but absolute symlinks met
//! on the way are resolved by the kernel against the *observer's* root. A
//! [`Wormhole`] pairs such a root with a [`SymlinkEvaluator`] so paths can be
//! resolved the way the observed process would see them, then opened from
//! the observer's side.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{Evaluation, LinkInspector, OsInspector, PathHandling, SymlinkEvaluator};

/// A root directory bound to a symlink evaluator.
///
/// # Examples
///
/// ```no_run
/// use procfsroot::{PathHandling, Wormhole};
///
/// let wormhole = Wormhole::for_pid(1);
/// let socket = wormhole
///     .host_path("/var/run/docker.sock", PathHandling::FullPath)
///     .unwrap();
/// // e.g. "/proc/1/root/run/docker.sock"
/// println!("{}", socket.display());
/// ```
#[derive(Debug, Clone)]
pub struct Wormhole<I = OsInspector> {
    root: PathBuf,
    evaluator: SymlinkEvaluator<I>,
}

impl Wormhole<OsInspector> {
    /// Bind an arbitrary root directory.
    ///
    /// Trailing separators are dropped. The root itself is never resolved:
    /// it is used as given, so it may well be a procfs symlink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `root` is empty or relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use procfsroot::Wormhole;
    /// use std::path::Path;
    ///
    /// let wormhole = Wormhole::new("/proc/42/root/").unwrap();
    /// assert_eq!(wormhole.root(), Path::new("/proc/42/root"));
    /// assert!(Wormhole::new("proc/42/root").is_err());
    /// ```
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            root: validate_root(root.as_ref())?,
            evaluator: SymlinkEvaluator::new(),
        })
    }

    /// The wormhole of process `pid` below `/proc`.
    #[must_use]
    pub fn for_pid(pid: u32) -> Self {
        Self {
            root: pid_root(Path::new("/proc"), pid),
            evaluator: SymlinkEvaluator::new(),
        }
    }

    /// The wormhole of process `pid` below a custom procfs mount point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `procfs` is empty or relative.
    pub fn for_pid_in(procfs: impl AsRef<Path>, pid: u32) -> Result<Self> {
        let procfs = validate_root(procfs.as_ref())?;
        Ok(Self {
            root: pid_root(&procfs, pid),
            evaluator: SymlinkEvaluator::new(),
        })
    }

    /// The wormhole of process `pid`, honouring the procfs mount point and
    /// jump ceiling from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the configured procfs is relative.
    pub fn for_pid_with_config(config: &Config, pid: u32) -> Result<Self> {
        Ok(Self::for_pid_in(config.procfs_or_default(), pid)?
            .with_max_jumps(config.max_jumps_or_default()))
    }
}

impl<I: LinkInspector> Wormhole<I> {
    /// Replace the link inspector, keeping root and jump ceiling.
    #[must_use]
    pub fn with_inspector<J: LinkInspector>(self, inspector: J) -> Wormhole<J> {
        Wormhole {
            root: self.root,
            evaluator: SymlinkEvaluator::with_inspector(inspector)
                .with_max_jumps(self.evaluator.max_jumps()),
        }
    }

    /// Configure the maximum number of symlinks followed per evaluation.
    #[must_use]
    pub fn with_max_jumps(mut self, max_jumps: usize) -> Self {
        self.evaluator = self.evaluator.with_max_jumps(max_jumps);
        self
    }

    /// The enforced root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The underlying evaluator.
    #[must_use]
    pub const fn evaluator(&self) -> &SymlinkEvaluator<I> {
        &self.evaluator
    }

    /// Evaluate `path` as seen from inside the wormhole.
    ///
    /// # Errors
    ///
    /// See [`SymlinkEvaluator::evaluate`].
    pub fn eval(&self, path: impl AsRef<OsStr>, handling: PathHandling) -> Result<OsString> {
        self.evaluator.eval(path, &self.root, handling)
    }

    /// Evaluate `path`, returning the detailed outcome.
    ///
    /// # Errors
    ///
    /// See [`SymlinkEvaluator::evaluate`].
    pub fn evaluate(&self, path: impl AsRef<OsStr>, handling: PathHandling) -> Result<Evaluation> {
        self.evaluator.evaluate(path, &self.root, handling)
    }

    /// Evaluate `path` and prefix the result with the root, yielding a path
    /// the observer can open directly.
    ///
    /// # Errors
    ///
    /// See [`SymlinkEvaluator::evaluate`].
    pub fn host_path(&self, path: impl AsRef<OsStr>, handling: PathHandling) -> Result<PathBuf> {
        self.evaluate(path, handling)
            .map(|evaluation| evaluation.host_path().to_path_buf())
    }
}

fn validate_root(root: &Path) -> Result<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: root.to_path_buf(),
            reason: "root must not be empty".to_string(),
        });
    }
    if !root.is_absolute() {
        return Err(Error::InvalidPath {
            path: root.to_path_buf(),
            reason: "root must be absolute".to_string(),
        });
    }
    // PathBuf drops trailing separators when rebuilt from components.
    Ok(root.components().collect())
}

fn pid_root(procfs: &Path, pid: u32) -> PathBuf {
    procfs.join(pid.to_string()).join("root")
}
