//! Symlink evaluation confined to an enforced root.
//!
//! This module resolves "." and ".." components and symbolic links in a path
//! as if a given directory were the filesystem root.
//!
//! # Key Concepts
//!
//! ## Root
//!
//! The root is a directory prefix such as `/proc/1234/root`. Every path
//! component, and every absolute symlink target, is looked up below it.
//! Evaluated paths are returned without the root prefix.
//!
//! ## Confinement
//!
//! A `..` at the root is an error, whether it appears literally or inside a
//! relative symlink target. Nothing is ever clamped to the root silently.
//!
//! ## Final component handling
//!
//! [`PathHandling::FullPath`] resolves every component. With
//! [`PathHandling::ExceptLast`] the final component is taken as is: it is
//! neither followed nor required to exist.
//!
//! # Examples
//!
//! ```no_run
//! use procfsroot::path::{PathHandling, SymlinkEvaluator};
//!
//! let evaluator = SymlinkEvaluator::new();
//! let path = evaluator
//!     .eval("/var/run/docker.sock", "/proc/1/root", PathHandling::FullPath)
//!     .unwrap();
//! println!("{path:?}");
//! ```
//!
//! Lexical cleanup alone never needs the filesystem:
//!
//! ```
//! use procfsroot::path::normalize::clean;
//!
//! assert_eq!(clean("/a/./b//../c").unwrap(), "/a/c");
//! ```

pub mod evaluator;
pub mod inspector;
pub mod normalize;
mod types;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use evaluator::{eval_symlinks, SymlinkEvaluator, DEFAULT_MAX_JUMPS};
pub use inspector::{LinkInspector, NodeKind, OsInspector};
pub use types::{Evaluation, PathHandling};
