//! Joining two paths into one resolved path.
//!
//! A join concatenates `path1`, the platform separator and `path2`, then
//! routes the result through [`PathResolver::resolve_owned`]. It is not a
//! pure string operation: on unix the joined path must exist on disk at
//! call time, otherwise the join fails.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::path::assembler::{PathAssembler, DEFAULT_GROWTH_FACTOR, DEFAULT_JOIN_CAPACITY};
use crate::path::input::require_non_empty;
use crate::path::resolver::{Canonicalize, NativeCanonicalizer, PathResolver};
use crate::path::SEPARATOR;

/// Joins two paths and resolves the result.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::PathJoiner;
/// use std::path::Path;
///
/// let joiner = PathJoiner::new();
/// let joined = joiner.join(Path::new("dir"), Path::new("file.txt")).unwrap();
/// assert!(joined.is_absolute());
/// assert!(joined.ends_with("file.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct PathJoiner<C = NativeCanonicalizer> {
    resolver: PathResolver<C>,
    capacity: usize,
    growth_factor: f64,
}

impl Default for PathJoiner {
    fn default() -> Self {
        Self::with_resolver(PathResolver::new())
    }
}

impl PathJoiner {
    /// Create a joiner backed by the native resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a native joiner using the assembler and resolver settings in
    /// `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_resolver(PathResolver::from_config(config))
            .with_capacity(config.join_capacity())
            .with_growth_factor(config.growth_factor())
    }
}

impl<C: Canonicalize> PathJoiner<C> {
    /// Create a joiner that resolves through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: PathResolver<C>) -> Self {
        Self {
            resolver,
            capacity: DEFAULT_JOIN_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the assembler's initial capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the assembler's growth factor.
    #[must_use]
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// The resolver joined paths are passed through.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver<C> {
        &self.resolver
    }

    /// Join `path1` and `path2` with the platform separator and resolve the
    /// result.
    ///
    /// Both arguments are checked before anything is allocated or resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either path is empty, or the growth factor is invalid (`InvalidInput`)
    /// - The intermediate path cannot be allocated (`Allocation`)
    /// - The joined path cannot be resolved (`Resolution`, `PathTooLong`)
    pub fn join(&self, path1: &Path, path2: &Path) -> Result<PathBuf> {
        let path1 = require_non_empty("path1", path1)?;
        let path2 = require_non_empty("path2", path2)?;

        let mut assembler = PathAssembler::new(self.capacity, self.growth_factor)?;
        assembler.push(path1.as_os_str())?;
        assembler.push_char(SEPARATOR)?;
        assembler.push(path2.as_os_str())?;
        let joined = PathBuf::from(assembler.finish());

        log::debug!(
            "joined {} and {} as {}",
            path1.display(),
            path2.display(),
            joined.display()
        );
        self.resolver.resolve_owned(&joined)
    }
}
