//! Argument checks shared by every path operation.

use std::path::Path;

use crate::error::{Error, Result};

/// Reject an empty path before it reaches the filesystem.
pub(crate) fn require_non_empty<'a>(argument: &'static str, path: &'a Path) -> Result<&'a Path> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidInput {
            argument,
            reason: "path must not be empty".to_string(),
        });
    }
    Ok(path)
}
