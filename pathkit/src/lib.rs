#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Cross-platform path utilities: canonical resolution, file name
//! extraction and joining.
//!
//! Paths are handled as the platform's native strings. On unix that is raw
//! bytes and on Windows it is UTF-16, so names that are not valid UTF-8
//! survive every operation unchanged.
//!
//! ## Core Operations
//!
//! - [`resolve_owned`] and [`resolve_into_buffer`]: absolute, canonical paths
//! - [`file_name`]: the text after the last separator
//! - [`join`]: concatenate two paths and resolve the result
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! Each operation also has a configurable type ([`PathResolver`],
//! [`FileNameExtractor`], [`PathJoiner`]) that can be built from a
//! [`Config`].
//!
//! ## Examples
//!
//! ```
//! use pathkit::file_name;
//!
//! let name = file_name(format!("dir{}report.pdf", pathkit::SEPARATOR)).unwrap();
//! assert_eq!(name, "report.pdf");
//!
//! // A trailing separator means there is no file name
//! let name = file_name(format!("dir{}", pathkit::SEPARATOR)).unwrap();
//! assert!(name.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    file_name, join, resolve_into_buffer, resolve_owned, Canonicalize, FileNameExtractor,
    NativeCanonicalizer, PathAssembler, PathJoiner, PathResolver, SEPARATOR,
};
