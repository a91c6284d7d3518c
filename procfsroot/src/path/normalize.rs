//! Lexical path normalization.
//!
//! These helpers work purely on path bytes, never touching the filesystem.
//! They operate on `/`-separated byte strings because the paths they handle
//! are interpreted relative to an enforced root rather than the host's own
//! view, and Linux path components need not be UTF-8.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Lexically clean an absolute path.
///
/// Collapses repeated separators, removes `.` components and resolves `..`
/// against the preceding component. A missing leading separator is
/// synthesized. The result always starts with exactly one `/` and never ends
/// with one, except for the root itself.
///
/// # Errors
///
/// Returns [`Error::NoParentDirectory`] if a `..` would climb above `/`;
/// this never silently clamps to the root.
///
/// # Examples
///
/// ```
/// use procfsroot::path::normalize::clean;
///
/// assert_eq!(clean("/////a/./b.txt").unwrap(), "/a/b.txt");
/// assert_eq!(clean("a/d/../b.txt").unwrap(), "/a/b.txt");
/// assert_eq!(clean("").unwrap(), "/");
/// assert!(clean("/a/../..").is_err());
/// ```
pub fn clean(path: impl AsRef<OsStr>) -> Result<OsString> {
    let path = path.as_ref();
    let mut cleaned = vec![b'/'];
    for component in path.as_bytes().split(|&b| b == b'/') {
        match component {
            b"" | b"." => {}
            b".." => {
                if cleaned == b"/" {
                    return Err(Error::NoParentDirectory {
                        path: PathBuf::from(path),
                    });
                }
                pop_component(&mut cleaned);
            }
            name => push_component(&mut cleaned, name),
        }
    }
    Ok(OsString::from_vec(cleaned))
}

/// Appends `name` to `dest`, inserting exactly one separator.
pub(crate) fn push_component(dest: &mut Vec<u8>, name: &[u8]) {
    if dest.last() != Some(&b'/') {
        dest.push(b'/');
    }
    dest.extend_from_slice(name);
}

/// Removes the last component from `dest`, leaving at least `/`.
pub(crate) fn pop_component(dest: &mut Vec<u8>) {
    match dest.iter().rposition(|&b| b == b'/') {
        Some(idx) if idx > 0 => dest.truncate(idx),
        _ => {
            dest.clear();
            dest.push(b'/');
        }
    }
}
