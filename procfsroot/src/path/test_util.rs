//! Shared test utilities for path unit tests.
//!
//! Provides an in-memory [`LinkInspector`] so evaluator tests can describe a
//! filesystem as a handful of entries instead of building it on disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use crate::path::inspector::{LinkInspector, NodeKind};

#[derive(Debug, Clone)]
enum Node {
    Directory,
    File,
    Symlink(PathBuf),
}

/// In-memory filesystem double.
///
/// Lookups are exact: unlike a real kernel, intermediate symlinks inside a
/// queried path are never followed. Every queried path is recorded so tests
/// can check which paths the evaluator asked about.
#[derive(Debug, Default)]
pub struct MemoryInspector {
    nodes: HashMap<PathBuf, Node>,
    queries: RefCell<Vec<PathBuf>>,
}

impl MemoryInspector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dir(mut self, path: impl AsRef<OsStr>) -> Self {
        self.nodes.insert(PathBuf::from(path.as_ref()), Node::Directory);
        self
    }

    #[must_use]
    pub fn file(mut self, path: impl AsRef<OsStr>) -> Self {
        self.nodes.insert(PathBuf::from(path.as_ref()), Node::File);
        self
    }

    #[must_use]
    pub fn symlink(mut self, path: impl AsRef<OsStr>, target: impl AsRef<OsStr>) -> Self {
        self.nodes.insert(
            PathBuf::from(path.as_ref()),
            Node::Symlink(PathBuf::from(target.as_ref())),
        );
        self
    }

    /// All paths passed to either query, in call order.
    pub fn queries(&self) -> Vec<PathBuf> {
        self.queries.borrow().clone()
    }

    fn lookup(&self, path: &Path) -> io::Result<&Node> {
        self.queries.borrow_mut().push(path.to_path_buf());
        self.nodes
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }
}

impl LinkInspector for MemoryInspector {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        match self.lookup(path)? {
            Node::Symlink(target) => Ok(target.clone()),
            _ => Err(io::Error::new(io::ErrorKind::InvalidInput, "not a symlink")),
        }
    }

    fn classify(&self, path: &Path) -> io::Result<NodeKind> {
        Ok(match self.lookup(path)? {
            Node::Directory => NodeKind::Directory,
            Node::File => NodeKind::Other,
            Node::Symlink(_) => NodeKind::Symlink,
        })
    }
}

/// Root used by [`sample_tree`].
pub const ROOT: &str = "/R";

/// The sample tree below [`ROOT`]:
///
/// ```text
/// /outofreach.txt
/// /R/a/b.txt
/// /R/a/d/dummy.txt
/// /R/relsymlink -> a/b.txt
/// /R/abssymlink -> /a/d
/// /R/unrooter/tryingtoleavethebox -> ../../outofreach.txt
/// /R/empty -> ""
/// ```
#[must_use]
pub fn sample_tree() -> MemoryInspector {
    MemoryInspector::new()
        .file("/outofreach.txt")
        .dir("/R")
        .dir("/R/a")
        .file("/R/a/b.txt")
        .dir("/R/a/d")
        .file("/R/a/d/dummy.txt")
        .symlink("/R/relsymlink", "a/b.txt")
        .symlink("/R/abssymlink", "/a/d")
        .dir("/R/unrooter")
        .symlink("/R/unrooter/tryingtoleavethebox", "../../outofreach.txt")
        .symlink("/R/empty", "")
}
