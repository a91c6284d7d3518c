//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated environment with a temporary home directory and a
//! small tree of real symbolic links to resolve.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory and sample root.
///
/// Layout below the temporary directory:
///
/// ```text
/// home/                                   (HOME for the binary)
/// root/a/b.txt
/// root/relsymlink -> a/b.txt
/// root/run/docker.sock
/// root/var/run -> /run
/// root/unrooter/tryingtoleavethebox -> ../../outofreach.txt
/// root/ping -> pong
/// root/pong -> /ping
/// ```
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp_dir.path();

        fs::create_dir_all(base.join("home")).unwrap();
        fs::write(base.join("outofreach.txt"), "outside").unwrap();

        let root = base.join("root");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/b.txt"), "hello").unwrap();
        symlink("a/b.txt", root.join("relsymlink")).unwrap();
        fs::create_dir_all(root.join("run")).unwrap();
        fs::write(root.join("run/docker.sock"), "").unwrap();
        fs::create_dir_all(root.join("var")).unwrap();
        symlink("/run", root.join("var/run")).unwrap();
        fs::create_dir_all(root.join("unrooter")).unwrap();
        symlink(
            "../../outofreach.txt",
            root.join("unrooter/tryingtoleavethebox"),
        )
        .unwrap();
        symlink("pong", root.join("ping")).unwrap();
        symlink("/ping", root.join("pong")).unwrap();

        Self { temp_dir }
    }

    /// Path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The sample root directory.
    pub fn root(&self) -> PathBuf {
        self.path().join("root")
    }

    /// The isolated home directory.
    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    /// A command with an isolated home and no `PROCFSROOT_*` variables.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("procfsroot").expect("Failed to find procfsroot binary");
        cmd.env("HOME", self.home())
            .env_remove("PROCFSROOT_CONFIG")
            .env_remove("PROCFSROOT_MAX_JUMPS")
            .env_remove("PROCFSROOT_PROCFS")
            .env_remove("PROCFSROOT_EXCEPT_LAST")
            .env_remove("PROCFSROOT_LOG_MODE");
        cmd
    }

    /// `procfsroot eval <path> --root <sample root>`.
    pub fn eval(&self, path: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("eval").arg(path).arg("--root").arg(self.root());
        cmd
    }

    /// Write a file below the temporary directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
