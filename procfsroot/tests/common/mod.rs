//! Common test utilities for integration tests.
//!
//! Builds small on-disk trees with real symbolic links inside a temporary
//! directory, so the evaluator can be exercised against the kernel's own
//! `lstat` and `readlink`.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch filesystem with a confined root and a procfs look-alike.
///
/// Layout below the temporary directory:
///
/// ```text
/// outofreach.txt
/// root/a/b.txt
/// root/a/d/dummy.txt
/// root/relsymlink -> a/b.txt
/// root/abssymlink -> /a/d
/// root/unrooter/tryingtoleavethebox -> ../../outofreach.txt
/// root/run/docker.sock
/// root/var/run -> /run
/// root/ping -> pong
/// root/pong -> /ping
/// root/esc -> /../etc
/// proc/self/root -> ../..
/// ```
pub struct Sandbox {
    temp: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates the sandbox layout.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();

        fs::write(base.join("outofreach.txt"), "you shall not pass").unwrap();

        let root = base.join("root");
        fs::create_dir_all(root.join("a/d")).unwrap();
        fs::write(root.join("a/b.txt"), "hello").unwrap();
        fs::write(root.join("a/d/dummy.txt"), "better than .gitkeep").unwrap();
        symlink("a/b.txt", root.join("relsymlink")).unwrap();
        symlink("/a/d", root.join("abssymlink")).unwrap();

        fs::create_dir_all(root.join("unrooter")).unwrap();
        symlink(
            "../../outofreach.txt",
            root.join("unrooter/tryingtoleavethebox"),
        )
        .unwrap();

        fs::create_dir_all(root.join("run")).unwrap();
        fs::write(root.join("run/docker.sock"), "").unwrap();
        fs::create_dir_all(root.join("var")).unwrap();
        symlink("/run", root.join("var/run")).unwrap();

        symlink("pong", root.join("ping")).unwrap();
        symlink("/ping", root.join("pong")).unwrap();
        symlink("/../etc", root.join("esc")).unwrap();

        fs::create_dir_all(base.join("proc/self")).unwrap();
        symlink("../..", base.join("proc/self/root")).unwrap();

        Self { temp }
    }

    /// The temporary directory holding everything.
    pub fn base(&self) -> &Path {
        self.temp.path()
    }

    /// The confined root containing the sample tree.
    pub fn root(&self) -> PathBuf {
        self.base().join("root")
    }

    /// The `proc/self/root` link, which points back at the sandbox base.
    pub fn proc_self_root(&self) -> PathBuf {
        self.base().join("proc/self/root")
    }
}

/// Writes `content` to `dir/filename` and returns the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}
