//! Platform selection for path resolution and code-unit handling.
//!
//! Each platform family provides:
//! - `Unit`: the code unit an `OsStr` is scanned and assembled in
//! - `SEPARATOR_UNIT`: the separator as a `Unit`
//! - `as_units` / `from_units`: conversions between `OsStr` and units
//! - `encode_char`: a `char` as units
//! - `real_path`: the native canonicalization primitive

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(any(unix, windows)))]
compile_error!("pathkit supports unix and windows targets only");
