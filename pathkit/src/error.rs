//! Error types for the pathkit library.
//!
//! Every path operation reports failure through [`Error`]. Callers that only
//! need a success signal can use `.ok()` or `.is_ok()`; callers that care can
//! inspect [`Error::kind`] to tell invalid input, resolution failures and
//! allocation failures apart.

use std::collections::TryReserveError;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(256)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was rejected before any filesystem access.
    #[error("invalid {argument}: {reason}")]
    InvalidInput {
        /// The name of the rejected argument.
        argument: &'static str,
        /// The reason the argument was rejected.
        reason: String,
    },

    /// The platform resolver could not resolve the path.
    #[error("cannot resolve {}: {source}", path.display())]
    Resolution {
        /// The path handed to the resolver.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The resolved path does not fit into the caller's buffer.
    #[error("buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall {
        /// Bytes needed, including the NUL terminator.
        required: usize,
        /// The capacity supplied by the caller.
        capacity: usize,
    },

    /// The resolved path exceeds the configured maximum length.
    #[error("resolved path {} is {len} bytes long (maximum {max})", path.display())]
    PathTooLong {
        /// The resolved path.
        path: PathBuf,
        /// Its encoded length in bytes.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Storage for an intermediate or output string could not be reserved.
    #[error("failed to reserve {requested} units of path storage: {source}")]
    Allocation {
        /// The number of code units that were requested.
        requested: usize,
        /// The allocator error.
        #[source]
        source: TryReserveError,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The configuration file path.
        path: PathBuf,
        /// Why the file could not be used.
        reason: String,
    },
}

/// Coarse classification of an [`Error`].
///
/// Path operations only ever fail with one of the first three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or otherwise unusable argument.
    InvalidInput,
    /// The OS could not resolve the path, or the result did not fit.
    ResolutionFailure,
    /// Intermediate or output storage could not be allocated.
    AllocationFailure,
    /// Configuration loading or validation failed.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::ResolutionFailure => write!(f, "resolution failure"),
            Self::AllocationFailure => write!(f, "allocation failure"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

impl Error {
    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Error, ErrorKind};
    ///
    /// let err = Error::BufferTooSmall { required: 10, capacity: 9 };
    /// assert_eq!(err.kind(), ErrorKind::ResolutionFailure);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Resolution { .. } | Self::BufferTooSmall { .. } | Self::PathTooLong { .. } => {
                ErrorKind::ResolutionFailure
            }
            Self::Allocation { .. } => ErrorKind::AllocationFailure,
            Self::Validation { .. } | Self::Configuration(_) | Self::ConfigFile { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    /// Check if the error was raised before any filesystem access.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::InvalidInput { argument: "path", reason: "empty".into() };
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Check if the platform resolver failed or its result did not fit.
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        self.kind() == ErrorKind::ResolutionFailure
    }

    /// Check if storage could not be reserved.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        self.kind() == ErrorKind::AllocationFailure
    }

    /// Check if the error means the path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Resolution {
    ///     path: PathBuf::from("/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resolution { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
