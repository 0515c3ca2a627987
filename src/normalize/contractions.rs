// Token-level contraction expansion.
//
// Under the default stage order this runs after punctuation removal has
// already deleted every token containing an apostrophe, so it sees only
// contraction-free input. It is still a real stage: a reordered pipeline
// (or a caller normalizing pre-tokenized text) exercises it, and the
// tests pin its behavior down.

use std::collections::HashMap;

/// Contraction -> expansion pairs for the default English table.
const ENGLISH_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "are not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("i'd", "i would"),
    ("i'll", "i will"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("shouldn't", "should not"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what's", "what is"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Contraction lookup table.
pub struct Contractions {
    entries: HashMap<String, String>,
}

impl Contractions {
    /// The built-in English table.
    pub fn english() -> Self {
        Self::from_entries(
            ENGLISH_CONTRACTIONS
                .iter()
                .map(|(c, e)| (c.to_string(), e.to_string())),
        )
    }

    /// Build a table from arbitrary entries (tests inject fakes).
    pub fn from_entries<I: IntoIterator<Item = (String, String)>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Expand a single token. The expansion replaces the token as one
    /// element even when it contains a space — expansion is token-level,
    /// not a re-tokenization. Unknown tokens pass through unchanged.
    pub fn expand(&self, token: &str) -> String {
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
    fn test_known_contraction_expands() {
        let c = Contractions::english();
        assert_eq!(c.expand("don't"), "do not");
        assert_eq!(c.expand("won't"), "will not");
    }

    #[test]
    fn test_expansion_is_a_single_element() {
        let c = Contractions::english();
        let expanded = c.expand("i'm");
        assert_eq!(expanded, "i am");
        assert!(expanded.contains(' '), "expansion stays one token");
    }

    #[test]
    fn test_plain_word_passes_through() {
        let c = Contractions::english();
        assert_eq!(c.expand("video"), "video");
    }
}
