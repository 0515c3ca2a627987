// Dictionary-lookup lemmatization.
//
// Maps a token to its dictionary base form. This runs after stemming, so
// the built-in table is keyed on forms the stemmer leaves alone —
// irregular plurals and irregular verb forms that suffix-stripping
// cannot reach. Tokens with no entry pass through unchanged; a miss is
// the normal case, not an error.

use std::collections::HashMap;

/// Irregular form -> lemma pairs for the default English table.
/// Suffix-stripping handles the regular inflections before this runs.
const ENGLISH_LEMMAS: &[(&str, &str)] = &[
    // Irregular plurals
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("teeth", "tooth"),
    ("women", "woman"),
    // Irregular verb forms
    ("ate", "eat"),
    ("began", "begin"),
    ("came", "come"),
    ("did", "do"),
    ("gave", "give"),
    ("went", "go"),
    ("knew", "know"),
    ("made", "make"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("spoke", "speak"),
    ("took", "take"),
    ("threw", "throw"),
    ("wrote", "write"),
    // Irregular comparatives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Word -> lemma lookup table.
pub struct Lemmatizer {
    entries: HashMap<String, String>,
}

impl Lemmatizer {
    /// The built-in English table.
    pub fn english() -> Self {
        Self::from_entries(
            ENGLISH_LEMMAS
                .iter()
                .map(|(w, l)| (w.to_string(), l.to_string())),
        )
    }

    /// Build a lemmatizer from arbitrary entries (tests inject fakes).
    pub fn from_entries<I: IntoIterator<Item = (String, String)>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// An empty table — every token passes through.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up the lemma for a token, passing it through on a miss.
    pub fn lemma(&self, token: &str) -> String {
        self.entries
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_plural() {
        let l = Lemmatizer::english();
        assert_eq!(l.lemma("feet"), "foot");
    }

    #[test]
    fn test_miss_passes_through() {
        let l = Lemmatizer::english();
        assert_eq!(l.lemma("zxqv"), "zxqv");
    }

    #[test]
    fn test_injected_entries_win() {
        let l = Lemmatizer::from_entries(vec![("runn".to_string(), "run".to_string())]);
        assert_eq!(l.lemma("runn"), "run");
        assert_eq!(l.lemma("feet"), "feet"); // built-ins absent
    }
}
