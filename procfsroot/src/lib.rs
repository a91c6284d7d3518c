#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # procfsroot
//!
//! Resolve symbolic links in paths as if a given directory were the
//! filesystem root.
//!
//! The typical root is a procfs "wormhole" such as `/proc/<pid>/root`, which
//! exposes another process's view of the filesystem. Absolute symlinks met
//! below such a root must be interpreted relative to it, not relative to the
//! observer's `/`, and no path may ever climb out of it.
//!
//! ## Core Types
//!
//! - [`eval_symlinks`] and [`SymlinkEvaluator`]: root-confined symlink evaluation
//! - [`PathHandling`]: whether the final component is resolved
//! - [`Wormhole`]: a root bound to an evaluator
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use procfsroot::{eval_symlinks, PathHandling};
//!
//! let path = eval_symlinks("/var/run/docker.sock", "/proc/1/root", PathHandling::FullPath)
//!     .unwrap();
//! assert_eq!(path, "/run/docker.sock");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod wormhole;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{eval_symlinks, Evaluation, PathHandling, SymlinkEvaluator, DEFAULT_MAX_JUMPS};
pub use wormhole::Wormhole;
