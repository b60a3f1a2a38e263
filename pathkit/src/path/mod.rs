//! Path resolution, file name extraction and joining.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! Resolution turns a path into its absolute, canonical form using the host
//! platform's facility:
//! - On unix, realpath(3) follows symlinks and collapses `.` and `..`. Every
//!   component must exist.
//! - On Windows, full-path expansion makes the path absolute, collapses `.`
//!   and `..` and normalizes separators. The path does not need to exist.
//!
//! The platform facility sits behind the [`Canonicalize`] trait, so
//! [`PathResolver`] and [`PathJoiner`] can run on an injected backend.
//!
//! ## Extraction
//!
//! [`file_name`] is a pure scan that returns everything after the last
//! [`SEPARATOR`]. A path ending in a separator yields an empty name.
//!
//! ## Joining
//!
//! [`join`] concatenates two paths with the separator and resolves the
//! result. Because it goes through resolution, on unix it only succeeds for
//! paths that exist at call time.
//!
//! # Examples
//!
//! ```no_run
//! use pathkit::path::{file_name, join, resolve_owned};
//!
//! let absolute = resolve_owned("./src").unwrap();
//! assert!(absolute.is_absolute());
//!
//! let joined = join("src", "lib.rs").unwrap();
//! assert_eq!(file_name(&joined).unwrap(), "lib.rs");
//! ```

pub mod assembler;
pub mod file_name;
mod input;
pub mod join;
pub mod resolver;
mod sys;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;

// Re-export key types
pub use assembler::PathAssembler;
pub use file_name::FileNameExtractor;
pub use join::PathJoiner;
pub use resolver::{Canonicalize, NativeCanonicalizer, PathResolver};

/// The platform's path separator.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Resolve `path` into a newly allocated absolute, canonical path.
///
/// # Errors
///
/// Returns an error if the path is empty or cannot be resolved. See
/// [`PathResolver::resolve_owned`].
pub fn resolve_owned(path: impl AsRef<Path>) -> Result<PathBuf> {
    PathResolver::new().resolve_owned(path.as_ref())
}

/// Resolve `path` into the first `capacity` bytes of `buffer`.
///
/// The path is written NUL-terminated; the returned length excludes the
/// terminator.
///
/// # Errors
///
/// Returns an error if the path is empty, `capacity` exceeds the buffer,
/// resolution fails or the result does not fit. See
/// [`PathResolver::resolve_into_buffer`].
///
/// # Examples
///
/// ```no_run
/// let mut buffer = [0u8; 4096];
/// let len = pathkit::resolve_into_buffer(".", &mut buffer, 4096).unwrap();
/// assert_eq!(buffer[len], 0);
/// ```
pub fn resolve_into_buffer(
    path: impl AsRef<Path>,
    buffer: &mut [u8],
    capacity: usize,
) -> Result<usize> {
    PathResolver::new().resolve_into_buffer(path.as_ref(), buffer, capacity)
}

/// Return the text after the last separator of `path`.
///
/// # Errors
///
/// Returns an error if the path is empty. See [`FileNameExtractor::extract`].
pub fn file_name(path: impl AsRef<Path>) -> Result<OsString> {
    FileNameExtractor::new().extract(path.as_ref())
}

/// Join two paths with the separator and resolve the result.
///
/// # Errors
///
/// Returns an error if either path is empty or the joined path cannot be
/// resolved. See [`PathJoiner::join`].
pub fn join(path1: impl AsRef<Path>, path2: impl AsRef<Path>) -> Result<PathBuf> {
    PathJoiner::new().join(path1.as_ref(), path2.as_ref())
}
