//! File name extraction.
//!
//! Extraction is a pure scan over the path's code units: every separator
//! discards what was collected so far, so only the text after the last
//! separator survives. Unlike [`Path::file_name`], a trailing separator
//! yields an empty name rather than the previous segment, and `..` is
//! returned verbatim.

use std::ffi::OsString;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::path::assembler::{PathAssembler, DEFAULT_FILE_NAME_CAPACITY, DEFAULT_GROWTH_FACTOR};
use crate::path::input::require_non_empty;
use crate::path::sys;

/// Extracts the last segment of a path.
///
/// # Examples
///
/// ```
/// use pathkit::path::{FileNameExtractor, SEPARATOR};
/// use std::path::Path;
///
/// let extractor = FileNameExtractor::new();
/// let path = format!("dir{SEPARATOR}sub{SEPARATOR}file.txt");
/// assert_eq!(extractor.extract(Path::new(&path)).unwrap(), "file.txt");
///
/// // A trailing separator leaves nothing after it
/// let path = format!("dir{SEPARATOR}");
/// assert_eq!(extractor.extract(Path::new(&path)).unwrap(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileNameExtractor {
    capacity: usize,
    growth_factor: f64,
}

impl Default for FileNameExtractor {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_FILE_NAME_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl FileNameExtractor {
    /// Create an extractor with default assembler settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor using the assembler settings in `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            capacity: config.file_name_capacity(),
            growth_factor: config.growth_factor(),
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

    /// Return the text after the last separator of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty (`InvalidInput`)
    /// - The growth factor is invalid (`InvalidInput`)
    /// - The name buffer cannot be allocated (`Allocation`)
    pub fn extract(&self, path: &Path) -> Result<OsString> {
        let path = require_non_empty("path", path)?;
        let mut assembler = PathAssembler::new(self.capacity, self.growth_factor)?;

        for &unit in sys::as_units(path.as_os_str()).iter() {
            if unit == sys::SEPARATOR_UNIT {
                assembler.reset();
            } else {
                assembler.push_unit(unit)?;
            }
        }

        let name = assembler.finish();
        log::debug!("file name of {} is {:?}", path.display(), name);
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SEPARATOR;

    fn sep_path(segments: &[&str]) -> String {
        let separator = SEPARATOR.to_string();
        segments.join(separator.as_str())
    }

    #[test]
    fn test_extract_last_segment() {
        let path = sep_path(&["a", "b", "c"]);
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert_eq!(name, OsString::from("c"));
    }

    #[test]
    fn test_extract_single_name() {
        let name = FileNameExtractor::new()
            .extract(Path::new("singlename"))
            .unwrap();
        assert_eq!(name, OsString::from("singlename"));
    }

    #[test]
    fn test_extract_trailing_separator_is_empty() {
        let path = sep_path(&["a", "b", ""]);
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn test_extract_separator_only() {
        let path = SEPARATOR.to_string();
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn test_extract_absolute_path() {
        let path = format!("{SEPARATOR}{}", sep_path(&["usr", "lib", "libc.so"]));
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert_eq!(name, OsString::from("libc.so"));
    }

    #[test]
    fn test_extract_keeps_dot_segments_verbatim() {
        let path = sep_path(&["a", ".."]);
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert_eq!(name, OsString::from(".."));
    }

    #[test]
    fn test_extract_non_ascii() {
        let path = sep_path(&["données", "résumé.pdf"]);
        let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        assert_eq!(name, OsString::from("résumé.pdf"));
    }

    #[test]
    fn test_extract_segment_longer_than_capacity() {
        let long = "x".repeat(500);
        let path = sep_path(&["dir", &long]);
        let name = FileNameExtractor::new()
            .with_capacity(1)
            .extract(Path::new(&path))
            .unwrap();
        assert_eq!(name, OsString::from(long));
    }

    #[test]
    fn test_extract_empty_rejected() {
        let err = FileNameExtractor::new().extract(Path::new("")).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_extract_invalid_growth_factor() {
        let err = FileNameExtractor::new()
            .with_growth_factor(1.0)
            .extract(Path::new("name"))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = OsStr::from_bytes(b"dir/\xFFname");
        let name = FileNameExtractor::new().extract(Path::new(path)).unwrap();
        assert_eq!(name.as_bytes(), b"\xFFname");
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_backslash_is_not_a_separator_on_unix() {
        let name = FileNameExtractor::new()
            .extract(Path::new(r"a\b"))
            .unwrap();
        assert_eq!(name, OsString::from(r"a\b"));
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-zA-Z0-9._ -]{0,12}", 1..=6)
        }

        proptest! {
            /// The extracted name is exactly the last separated segment.
            #[test]
            fn extract_returns_last_segment(segments in segments_strategy()) {
                let path = sep_path(&segments.iter().map(String::as_str).collect::<Vec<_>>());
                prop_assume!(!path.is_empty());

                let name = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
                prop_assert_eq!(name, OsString::from(segments.last().unwrap()));
            }

            /// The extracted name never contains a separator.
            #[test]
            fn extract_never_contains_separator(s in "[a-z/\\\\]{1,24}") {
                let name = FileNameExtractor::new().extract(Path::new(&s)).unwrap();
                prop_assert!(!name.to_string_lossy().contains(SEPARATOR));
            }
        }
    }
}
