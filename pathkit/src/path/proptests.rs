//! Property-based tests for path handling.
//!
//! Note: the resolver and extractor modules carry light property tests of
//! their own. This module covers properties that span several operations
//! and need a real directory tree.

use super::{file_name, join, resolve_owned, FileNameExtractor, SEPARATOR};
use proptest::prelude::*;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::tempdir;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn relative_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

fn build_tree(root: &Path, segments: &[String]) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    fs::create_dir_all(&path).unwrap();
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(p)) == resolve(p)
    #[test]
    fn resolution_idempotent(segments in relative_path_strategy()) {
        let dir = tempdir().unwrap();
        let path = build_tree(dir.path(), &segments);

        let once = resolve_owned(&path).unwrap();
        let twice = resolve_owned(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Resolved paths are absolute and free of `.` and `..`
    #[test]
    fn resolution_output_is_canonical(segments in relative_path_strategy()) {
        let dir = tempdir().unwrap();
        let path = build_tree(dir.path(), &segments);
        let dotted = path.join(".").join("..").join(segments.last().unwrap());

        let resolved = resolve_owned(&dotted).unwrap();
        prop_assert!(resolved.is_absolute());
        for component in resolved.components() {
            prop_assert_ne!(component, Component::CurDir);
            prop_assert_ne!(component, Component::ParentDir);
        }
    }

    // Joining a directory with a file name extracted from elsewhere, then
    // extracting again, gives back the original name
    #[test]
    fn join_then_extract_round_trip(
        segments in relative_path_strategy(),
        name in segment_strategy()
    ) {
        let dir = tempdir().unwrap();
        let target = build_tree(dir.path(), &segments);
        fs::write(target.join(&name), "x").unwrap();

        let foreign = format!("elsewhere{SEPARATOR}{name}");
        let extracted = file_name(&foreign).unwrap();
        let joined = join(&target, &extracted).unwrap();

        prop_assert_eq!(file_name(&joined).unwrap(), OsString::from(&name));
    }

    // Extraction agrees with std for paths without a trailing separator
    #[test]
    fn extraction_matches_std_for_plain_names(segments in relative_path_strategy()) {
        let path = segments.join(SEPARATOR.to_string().as_str());
        let ours = FileNameExtractor::new().extract(Path::new(&path)).unwrap();
        let std_name = Path::new(&path).file_name().unwrap().to_os_string();
        prop_assert_eq!(ours, std_name);
    }
}
