//! Canonical path resolution.
//!
//! This module provides the [`Canonicalize`] seam over the platform's
//! resolution primitive and the [`PathResolver`] built on top of it, which
//! validates input and offers an owned and a buffer-writing variant.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::input::require_non_empty;
use crate::path::sys;

/// A backend that turns a path into its absolute, canonical form.
///
/// Implementations receive paths that have already been checked for
/// emptiness.
#[cfg_attr(test, mockall::automock)]
pub trait Canonicalize {
    /// Resolve `path` using the backend's facility.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error when resolution fails.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf>;
}

/// The host platform's resolver.
///
/// On unix this is realpath(3): symlinks are followed and every component
/// must exist. On Windows this is full-path expansion: `.` and `..` are
/// collapsed and separators normalized, without touching the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeCanonicalizer;

impl Canonicalize for NativeCanonicalizer {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        sys::real_path(path)
    }
}

/// Resolves paths to absolute, canonical form.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve_owned(Path::new(".")).unwrap();
/// assert!(resolved.is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver<C = NativeCanonicalizer> {
    canonicalizer: C,
    /// Upper bound on the encoded length of a resolved path.
    max_path_len: Option<usize>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::with_canonicalizer(NativeCanonicalizer)
    }
}

impl PathResolver {
    /// Create a resolver backed by the native platform resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a native resolver using the limits in `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::config::{Config, ResolverConfig};
    /// use pathkit::path::PathResolver;
    ///
    /// let config = Config {
    ///     resolver: Some(ResolverConfig { max_path_len: Some(1024) }),
    ///     ..Default::default()
    /// };
    /// let resolver = PathResolver::from_config(&config);
    /// assert_eq!(resolver.max_path_len(), Some(1024));
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_max_path_len(config.max_path_len())
    }
}

impl<C: Canonicalize> PathResolver<C> {
    /// Create a resolver backed by a custom canonicalization backend.
    #[must_use]
    pub fn with_canonicalizer(canonicalizer: C) -> Self {
        Self {
            canonicalizer,
            max_path_len: None,
        }
    }

    /// Reject resolved paths whose encoded length exceeds `max`.
    #[must_use]
    pub fn with_max_path_len(mut self, max: Option<usize>) -> Self {
        self.max_path_len = max;
        self
    }

    /// The configured length limit, if any.
    #[must_use]
    pub fn max_path_len(&self) -> Option<usize> {
        self.max_path_len
    }

    /// Resolve `path` into a newly allocated absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty (`InvalidInput`)
    /// - The backend cannot resolve it, e.g. a component does not exist or
    ///   permission is denied (`Resolution`)
    /// - The backend returns a relative path (`Resolution`)
    /// - The result exceeds the configured maximum length (`PathTooLong`)
    pub fn resolve_owned(&self, path: &Path) -> Result<PathBuf> {
        let path = require_non_empty("path", path)?;

        let resolved = match self.canonicalizer.resolve(path) {
            Ok(resolved) => resolved,
            Err(source) => {
                log::debug!("failed to resolve {}: {source}", path.display());
                return Err(Error::Resolution {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if !resolved.is_absolute() {
            return Err(Error::Resolution {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("resolver returned relative path {}", resolved.display()),
                ),
            });
        }

        if let Some(max) = self.max_path_len {
            let len = resolved.as_os_str().as_encoded_bytes().len();
            if len > max {
                return Err(Error::PathTooLong {
                    path: resolved,
                    len,
                    max,
                });
            }
        }

        log::debug!("resolved {} to {}", path.display(), resolved.display());
        Ok(resolved)
    }

    /// Resolve `path` and write it, NUL-terminated, into `buffer`.
    ///
    /// At most `capacity` bytes of `buffer` are used. The resolved path must
    /// be strictly shorter than `capacity` so the terminator fits. On
    /// failure the buffer is left untouched.
    ///
    /// Returns the number of path bytes written, excluding the terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty, or `capacity` exceeds `buffer.len()` (`InvalidInput`)
    /// - Resolution fails as for [`PathResolver::resolve_owned`]
    /// - The resolved path plus terminator does not fit (`BufferTooSmall`)
    pub fn resolve_into_buffer(
        &self,
        path: &Path,
        buffer: &mut [u8],
        capacity: usize,
    ) -> Result<usize> {
        let path = require_non_empty("path", path)?;
        if capacity > buffer.len() {
            return Err(Error::InvalidInput {
                argument: "capacity",
                reason: format!(
                    "capacity {capacity} exceeds buffer length {}",
                    buffer.len()
                ),
            });
        }

        let resolved = self.resolve_owned(path)?;
        let bytes = resolved.as_os_str().as_encoded_bytes();
        if bytes.len() >= capacity {
            return Err(Error::BufferTooSmall {
                required: bytes.len() + 1,
                capacity,
            });
        }

        buffer[..bytes.len()].copy_from_slice(bytes);
        buffer[bytes.len()] = 0;
        Ok(bytes.len())
    }
}
