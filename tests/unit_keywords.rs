// Unit tests for keyword loading and the match predicate.
//
// File-backed tests write under the OS temp dir; nothing touches the
// repository tree.

use std::fs;
use std::path::PathBuf;

use ember::error::Error;
use ember::keywords::KeywordSet;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ember-test-{name}-{}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_trims_lines_and_keeps_order() {
    let path = temp_file("trim", "  spam  \nidiot\n\n  Troll\n");
    let set = KeywordSet::load(&path).unwrap();
    fs::remove_file(&path).ok();

    // Trimmed, blank line skipped, casing and order preserved.
    assert_eq!(set.terms(), &["spam", "idiot", "Troll"]);
    assert!(set.contains("spam"));
    assert!(set.contains("Troll"));
    assert!(!set.contains("troll")); // casing preserved, matching exact
}

#[test]
fn load_missing_file_raises_resource_unavailable() {
    let path = PathBuf::from("/nonexistent/ember-keywords.txt");
    match KeywordSet::load(&path) {
        Err(Error::ResourceUnavailable { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ResourceUnavailable, got {other:?}"),
    }
}

#[test]
fn empty_file_yields_empty_set_without_error() {
    // An empty-but-readable file is not a resource failure; it just
    // never matches anything.
    let path = temp_file("empty", "");
    let set = KeywordSet::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(set.is_empty());
    assert!(!set.is_abusive(&["anything".to_string()]));
}

#[test]
fn membership_is_exact_not_substring() {
    let set = KeywordSet::from_terms(vec!["spam".to_string()]);
    assert!(set.is_abusive(&["spam".to_string()]));
    assert!(!set.is_abusive(&["spammer".to_string()]));
    assert!(!set.is_abusive(&["spa".to_string()]));
}
