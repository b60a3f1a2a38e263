//! Windows-like platforms: UTF-16 units and GetFullPathNameW.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::path::{self, Path, PathBuf};

/// Paths are (potentially ill-formed) UTF-16.
pub type Unit = u16;

/// `\`
pub const SEPARATOR_UNIT: Unit = b'\\' as Unit;

/// Re-encodes `s` as wide units.
pub fn as_units(s: &OsStr) -> Cow<'_, [Unit]> {
    Cow::Owned(s.encode_wide().collect())
}

/// Converts `units` back into an `OsString`.
pub fn from_units(units: Vec<Unit>) -> OsString {
    OsString::from_wide(&units)
}

/// Encodes `c` as UTF-16 into `scratch`.
pub fn encode_char(c: char, scratch: &mut [Unit; 4]) -> &[Unit] {
    let len = c.encode_utf16(scratch).len();
    &scratch[..len]
}

/// Full-path expansion.
///
/// `std::path::absolute` sizes the buffer with a first GetFullPathNameW call
/// and fills it with a second. The target does not need to exist and
/// symlinks are not followed.
pub fn real_path(path: &Path) -> io::Result<PathBuf> {
    path::absolute(path)
}
