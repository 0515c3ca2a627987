// Keyword store — the abusive-term list and the match predicate.
//
// The list is a flat text file, one term per line, reloaded fresh on
// every run. A read failure is a hard error: silently treating a missing
// file as "no keywords" would make every comment come back non-abusive.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;

/// The loaded set of abusive terms. Lines keep their original casing and
/// order for display; membership checks are exact and case-sensitive
/// against post-normalization tokens.
#[derive(Debug)]
pub struct KeywordSet {
    terms: Vec<String>,
    index: HashSet<String>,
}

impl KeywordSet {
    /// Load the keyword list from a line-delimited file, trimming each
    /// line of surrounding whitespace and skipping blank lines.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let terms: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = terms.len(), path = %path.display(), "Loaded keyword list");

        Ok(Self::from_terms(terms))
    }

    /// Build a set from in-memory terms (tests, or callers with their
    /// own source). Order is preserved for display.
    pub fn from_terms<I: IntoIterator<Item = String>>(terms: I) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms.iter().cloned().collect();
        Self { terms, index }
    }

    /// The terms in file order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact membership test for one token.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    /// The classifier: true iff any token is a member of the set.
    /// No substring or fuzzy matching — O(tokens) exact lookups.
    pub fn is_abusive(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.index.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> KeywordSet {
        KeywordSet::from_terms(terms.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_any_match_flags() {
        let k = set(&["spam", "idiot"]);
        let tokens = vec!["great".to_string(), "idiot".to_string()];
        assert!(k.is_abusive(&tokens));
    }

    #[test]
    fn test_no_match_passes() {
        let k = set(&["spam"]);
        let tokens = vec!["great".to_string(), "video".to_string()];
        assert!(!k.is_abusive(&tokens));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        // Tokens are lowercased by the pipeline; a keyword listed in
        // uppercase will never match, by design.
        let k = set(&["SPAM"]);
        assert!(!k.is_abusive(&["spam".to_string()]));
    }

    #[test]
    fn test_no_substring_matching() {
        let k = set(&["spam"]);
        assert!(!k.is_abusive(&["spammer".to_string()]));
    }

    #[test]
    fn test_empty_token_sequence_never_abusive() {
        let k = set(&["spam"]);
        assert!(!k.is_abusive(&[]));
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = KeywordSet::load(Path::new("/nonexistent/keywords.txt")).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }
}
