// Synonym normalization via a synset table.
//
// Each synset is an ordered group of words treated as synonymous; the
// first lemma of a group is its canonical form. Looking up a token takes
// its first sense (the first group containing it, in table order) and
// substitutes that group's first lemma. No frequency or context
// disambiguation — first sense, first lemma, always.
//
// Canonical forms are kept lowercase and alphanumeric so substitution
// never reintroduces characters the punctuation stage already removed.

use std::collections::HashMap;

/// Built-in English synset groups, most specific senses first. Weighted
/// toward insult vocabulary, since collapsing synonyms onto one
/// canonical form is what lets a short keyword list catch variants.
const ENGLISH_SYNSETS: &[&[&str]] = &[
    // Insults and abuse
    &["idiot", "imbecile", "cretin", "moron", "dunce", "halfwit"],
    &["fool", "sap", "muggins", "tomfool"],
    &["stupid", "dumb", "dim", "obtuse", "dense"],
    &["loser", "failure", "nonstarter", "flop"],
    &["trash", "rubbish", "garbage", "refuse"],
    &["liar", "prevaricator", "fibber", "fabricator"],
    &["coward", "craven", "poltroon", "recreant"],
    &["ugly", "hideous", "unsightly"],
    &["pathetic", "pitiable", "pitiful", "misfortunate"],
    &["worthless", "valueless", "useless"],
    &["hate", "detest", "despise", "loathe", "abhor"],
    &["kill", "destroy", "obliterate", "annihilate"],
    &["scam", "swindle", "racket", "fraud"],
    &["spam", "junk"],
    // General vocabulary
    &["awful", "dreadful", "terrible", "abominable"],
    &["angry", "furious", "irate", "livid"],
    &["bad", "atrocious", "lousy", "rotten"],
    &["big", "large", "huge", "enormous"],
    &["good", "fine", "superb", "splendid"],
    &["happy", "glad", "joyful", "cheerful"],
    &["sad", "unhappy", "sorrowful", "mournful"],
    &["small", "little", "tiny", "minute"],
];

/// An ordered group of synonymous words. The first lemma is canonical.
#[derive(Debug, Clone)]
pub struct Synset {
    pub lemmas: Vec<String>,
}

/// Word -> ordered senses lookup over a set of synsets.
pub struct Thesaurus {
    synsets: Vec<Synset>,
    /// For each word, the indices of the synsets containing it, in
    /// table order. The first entry is the word's first sense.
    senses: HashMap<String, Vec<usize>>,
}

impl Thesaurus {
    /// The built-in English table.
    pub fn english() -> Self {
        Self::from_groups(
            ENGLISH_SYNSETS
                .iter()
                .map(|group| group.iter().map(|s| s.to_string()).collect()),
        )
    }

    /// Build a thesaurus from ordered lemma groups (tests inject fakes).
    /// Group order defines sense order for words in several groups.
    pub fn from_groups<I: IntoIterator<Item = Vec<String>>>(groups: I) -> Self {
        let mut synsets = Vec::new();
        let mut senses: HashMap<String, Vec<usize>> = HashMap::new();

        for lemmas in groups {
            let idx = synsets.len();
            for lemma in &lemmas {
                senses.entry(lemma.clone()).or_default().push(idx);
            }
            synsets.push(Synset { lemmas });
        }

        Self { synsets, senses }
    }

    /// An empty table — every token passes through.
    pub fn empty() -> Self {
        Self::from_groups(std::iter::empty())
    }

    /// All senses for a word, first sense first.
    pub fn synsets_of(&self, word: &str) -> Vec<&Synset> {
        self.senses
            .get(word)
            .map(|idxs| idxs.iter().map(|&i| &self.synsets[i]).collect())
            .unwrap_or_default()
    }

    /// Canonical form of a token: the first lemma of its first sense,
    /// or the token itself when no synset contains it.
    pub fn canonical(&self, token: &str) -> String {
        match self.synsets_of(token).first() {
            Some(synset) => synset
                .lemmas
                .first()
                .cloned()
                .unwrap_or_else(|| token.to_string()),
            None => token.to_string(),
        }
    }
}
