//! Filesystem queries used by the symlink evaluator.
//!
//! The evaluator never touches the filesystem directly. Instead it asks a
//! [`LinkInspector`] two questions about `root + destination`: what kind of
//! node lives there, and (for symlinks) what text the link stores. Production
//! code uses [`OsInspector`]; tests swap in in-memory doubles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Classification of a filesystem node, as seen by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A symbolic link (not followed).
    Symlink,
    /// A directory.
    Directory,
    /// Anything else: regular files, devices, sockets, pipes.
    Other,
}

impl NodeKind {
    /// Returns `true` for [`NodeKind::Symlink`].
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        matches!(self, Self::Symlink)
    }

    /// Returns `true` for [`NodeKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Read-only queries about symbolic links.
///
/// Implementations perform no confinement of their own: the evaluator only
/// ever passes them paths of the form `root + destination`.
///
/// Implementations must fail with [`io::ErrorKind::NotFound`] for paths that
/// do not exist.
#[cfg_attr(test, mockall::automock)]
pub trait LinkInspector {
    /// Returns the literal target stored in the symlink at `path`.
    ///
    /// The target is returned byte for byte; it need not be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or is not a symlink.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Classifies the node at `path` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or cannot be queried.
    fn classify(&self, path: &Path) -> io::Result<NodeKind>;
}

impl<T: LinkInspector + ?Sized> LinkInspector for &T {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).read_link(path)
    }

    fn classify(&self, path: &Path) -> io::Result<NodeKind> {
        (**self).classify(path)
    }
}

/// Link inspector backed by the operating system.
///
/// # Examples
///
/// ```no_run
/// use procfsroot::path::{LinkInspector, NodeKind, OsInspector};
/// use std::path::Path;
///
/// let kind = OsInspector.classify(Path::new("/proc/self/root")).unwrap();
/// assert_eq!(kind, NodeKind::Symlink);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsInspector;

impl LinkInspector for OsInspector {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn classify(&self, path: &Path) -> io::Result<NodeKind> {
        let file_type = fs::symlink_metadata(path)?.file_type();
        Ok(if file_type.is_symlink() {
            NodeKind::Symlink
        } else if file_type.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::Other
        })
    }
}
