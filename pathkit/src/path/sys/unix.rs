//! POSIX-like platforms: byte units and realpath(3).

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

/// Paths are arbitrary byte strings.
pub type Unit = u8;

/// `/`
pub const SEPARATOR_UNIT: Unit = b'/';

/// Borrows the bytes of `s`.
pub fn as_units(s: &OsStr) -> Cow<'_, [Unit]> {
    Cow::Borrowed(s.as_bytes())
}

/// Takes ownership of `units` without copying.
pub fn from_units(units: Vec<Unit>) -> OsString {
    OsString::from_vec(units)
}

/// Encodes `c` as UTF-8 into `scratch`.
pub fn encode_char(c: char, scratch: &mut [Unit; 4]) -> &[Unit] {
    let len = c.encode_utf8(scratch).len();
    &scratch[..len]
}

/// realpath(3): follows every symlink and requires the path to exist.
pub fn real_path(path: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(path)
}
