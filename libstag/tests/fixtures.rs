//! Test harness for the parser against fixture files.
//!
//! Reads every `.tag` file from the repo-root `test/tag/` directory, parses
//! it, and compares the canonical re-rendering against the matching file in
//! `test/out/`. Reads every `.bad` file from `test/bad/` (expected to fail)
//! and verifies it produces exactly the message in its `.error` companion.
//! The fixture's file stem is used as the source label, so expected error
//! messages carry it.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use libstag::{encode_definitions, parse_tag};

/// Root fixture directory.
fn test_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// All fixture files with the given extension under a subdirectory of
/// `test/`, in stable order.
fn fixture_paths(subdir: &str, ext: &str) -> Vec<PathBuf> {
    let pattern = format!("{}/{}/*.{}", test_root().display(), subdir, ext);
    let mut paths: Vec<PathBuf> = glob(&pattern)
        .expect("fixture glob pattern")
        .flatten()
        .collect();
    paths.sort();
    paths
}

fn stem(path: &Path) -> String {
    path.file_stem().unwrap().to_string_lossy().to_string()
}

#[test]
fn test_valid_fixtures_render_canonically() {
    let paths = fixture_paths("tag", "tag");
    assert!(!paths.is_empty(), "no fixtures under test/tag");
    for path in paths {
        let name = stem(&path);
        let input = fs::read_to_string(&path).expect("read fixture");
        let expected_path = test_root().join("out").join(format!("{}.out", name));
        let expected = fs::read_to_string(&expected_path).expect("read expected output");

        let defs = parse_tag(input.trim_end(), &name)
            .unwrap_or_else(|e| panic!("{} failed to parse: {}", name, e));
        assert_eq!(
            encode_definitions(&defs),
            expected.trim_end(),
            "fixture {}",
            name
        );
    }
}

#[test]
fn test_invalid_fixtures_report_expected_errors() {
    let paths = fixture_paths("bad", "bad");
    assert!(!paths.is_empty(), "no fixtures under test/bad");
    for path in paths {
        let name = stem(&path);
        let input = fs::read_to_string(&path).expect("read fixture");
        let error_path = test_root().join("bad").join(format!("{}.error", name));
        let expected = fs::read_to_string(&error_path).expect("read expected error");

        let err = match parse_tag(input.trim_end(), &name) {
            Ok(_) => panic!("{} should fail to parse", name),
            Err(err) => err,
        };
        assert_eq!(err.to_string(), expected.trim_end(), "fixture {}", name);
    }
}
