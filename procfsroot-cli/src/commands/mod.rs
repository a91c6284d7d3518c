//! CLI command implementations.
//!
//! - `eval`: Resolve a path inside a root directory or process wormhole
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod eval;

pub use completions::CompletionsCommand;
pub use eval::EvalCommand;
