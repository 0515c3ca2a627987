// Text normalization — the fixed-order transformation pipeline.
//
// A comment goes through nine named stages, in order: URL stripping,
// lowercasing, tokenization, stopword removal, punctuation removal,
// stemming, lemmatization, contraction expansion, and synonym
// normalization. The order is a contract: stage 5 drops any token
// containing an apostrophe, so by the time contraction expansion runs
// the stream is already contraction-free. That makes stage 8 a no-op on
// real inputs. Deliberate or not, the behavior is kept as-is; the stage
// list is data (`Stage`), so a reordered pipeline can be tried without
// touching this engine.

pub mod contractions;
pub mod lemmatizer;
pub mod thesaurus;

use std::collections::HashSet;

use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use contractions::Contractions;
use lemmatizer::Lemmatizer;
use thesaurus::Thesaurus;

/// One named transformation stage. The default order is
/// [`Normalizer::DEFAULT_STAGES`]; a different order changes semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Remove `http` + non-whitespace substrings from the text.
    StripUrls,
    /// Fold the text to lowercase.
    Lowercase,
    /// Split into word-boundary tokens. Punctuation becomes standalone
    /// tokens; contractions like "don't" stay whole at this point.
    Tokenize,
    /// Drop tokens present in the English stopword set.
    RemoveStopwords,
    /// Drop tokens that are not entirely alphanumeric. This also deletes
    /// contraction tokens, since they contain an apostrophe.
    RemovePunctuation,
    /// Reduce each token to its rule-derived stem.
    Stem,
    /// Replace each token with its dictionary lemma, if one is known.
    Lemmatize,
    /// Expand contractions token-by-token. The expansion replaces the
    /// token as a single element even when it contains a space.
    ExpandContractions,
    /// Replace each token with the first lemma of its first synset.
    NormalizeSynonyms,
}

/// The result of running one comment through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The comment text as it stood at tokenization time — URLs stripped
    /// and lowercased under the default stage order.
    pub text: String,
    /// The surviving tokens, in original relative order.
    pub tokens: Vec<String>,
}

/// The normalizer, constructed once with all lexical resources injected
/// so tests can substitute fake data for any of them.
pub struct Normalizer {
    stages: Vec<Stage>,
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    lemmatizer: Lemmatizer,
    contractions: Contractions,
    thesaurus: Thesaurus,
    url_pattern: Regex,
}

impl Normalizer {
    /// The contractual stage order.
    pub const DEFAULT_STAGES: [Stage; 9] = [
        Stage::StripUrls,
        Stage::Lowercase,
        Stage::Tokenize,
        Stage::RemoveStopwords,
        Stage::RemovePunctuation,
        Stage::Stem,
        Stage::Lemmatize,
        Stage::ExpandContractions,
        Stage::NormalizeSynonyms,
    ];

    /// Build a normalizer with the default English resources: the
    /// stop-words English list, the Snowball English stemmer, and the
    /// built-in lemma, contraction, and synonym tables.
    pub fn english() -> Self {
        Self {
            stages: Self::DEFAULT_STAGES.to_vec(),
            stopwords: get(LANGUAGE::English).into_iter().collect(),
            stemmer: Stemmer::create(Algorithm::English),
            lemmatizer: Lemmatizer::english(),
            contractions: Contractions::english(),
            thesaurus: Thesaurus::english(),
            // Fixed literal, cannot fail to compile.
            url_pattern: Regex::new(r"http\S+").unwrap(),
        }
    }

    /// Override the stage order. The default order is the contract;
    /// callers reordering stages own the semantic consequences.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    /// Replace the stopword set (tests use a small fixed set).
    pub fn with_stopwords<I: IntoIterator<Item = String>>(mut self, words: I) -> Self {
        self.stopwords = words.into_iter().collect();
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_thesaurus(mut self, thesaurus: Thesaurus) -> Self {
        self.thesaurus = thesaurus;
        self
    }

    pub fn with_contractions(mut self, contractions: Contractions) -> Self {
        self.contractions = contractions;
        self
    }

    /// Run the configured stages over one comment.
    ///
    /// Pure: same input, same output, no side effects. Lookup misses in
    /// the stemmer, lemmatizer, or thesaurus pass tokens through
    /// unchanged — there are no error conditions.
    pub fn normalize(&self, comment: &str) -> Normalized {
        let mut text = comment.to_string();
        let mut tokens: Option<Vec<String>> = None;
        let mut snapshot: Option<String> = None;

        for stage in &self.stages {
            match stage {
                Stage::StripUrls => match tokens.as_mut() {
                    None => text = self.url_pattern.replace_all(&text, "").into_owned(),
                    // Text-level stage after tokenization: apply per token.
                    Some(toks) => {
                        for t in toks.iter_mut() {
                            *t = self.url_pattern.replace_all(t, "").into_owned();
                        }
                        toks.retain(|t| !t.is_empty());
                    }
                },
                Stage::Lowercase => match tokens.as_mut() {
                    None => text = text.to_lowercase(),
                    Some(toks) => {
                        for t in toks.iter_mut() {
                            *t = t.to_lowercase();
                        }
                    }
                },
                Stage::Tokenize => {
                    if tokens.is_none() {
                        snapshot = Some(text.clone());
                        tokens = Some(tokenize(&text));
                    }
                }
                Stage::RemoveStopwords => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    toks.retain(|t| !self.stopwords.contains(t));
                }
                Stage::RemovePunctuation => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    toks.retain(|t| !t.is_empty() && t.chars().all(char::is_alphanumeric));
                }
                Stage::Stem => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    for t in toks.iter_mut() {
                        *t = self.stemmer.stem(t).into_owned();
                    }
                }
                Stage::Lemmatize => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    for t in toks.iter_mut() {
                        *t = self.lemmatizer.lemma(t);
                    }
                }
                Stage::ExpandContractions => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    for t in toks.iter_mut() {
                        *t = self.contractions.expand(t);
                    }
                }
                Stage::NormalizeSynonyms => {
                    let toks = ensure_tokens(&text, &mut tokens, &mut snapshot);
                    for t in toks.iter_mut() {
                        *t = self.thesaurus.canonical(t);
                    }
                }
            }
        }

        let tokens = tokens.unwrap_or_else(|| tokenize(&text));
        let text = snapshot.unwrap_or(text);
        Normalized { text, tokens }
    }
}

/// Split on locale-aware word boundaries, dropping whitespace segments.
/// Punctuation segments are kept — the punctuation stage removes them
/// later. "don't" survives as a single token here.
fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Token-level stages appearing before `Tokenize` in a custom stage
/// order implicitly tokenize first.
fn ensure_tokens<'a>(
    text: &str,
    tokens: &'a mut Option<Vec<String>>,
    snapshot: &mut Option<String>,
) -> &'a mut Vec<String> {
    if tokens.is_none() {
        *snapshot = Some(text.to_string());
        *tokens = Some(tokenize(text));
    }
    tokens.as_mut().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_contractions_whole() {
        let tokens = tokenize("don't stop");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens = tokenize("great, thanks!");
        assert_eq!(tokens, vec!["great", ",", "thanks", "!"]);
    }

    #[test]
    fn test_url_stripped_before_tokenization() {
        let n = Normalizer::english().with_stopwords(Vec::new());
        let out = n.normalize("alpha http://x.co/abc omega");
        assert_eq!(out.tokens, vec!["alpha", "omega"]);
        assert!(!out.text.contains("http"));
    }

    #[test]
    fn test_processed_text_is_lowercased_and_stripped() {
        let n = Normalizer::english();
        let out = n.normalize("CHECK http://spam.example NOW");
        assert_eq!(out.text, "check  now");
    }

    #[test]
    fn test_final_tokens_alphanumeric_lowercase() {
        let n = Normalizer::english();
        let out = n.normalize("Wow!! Don't click http://bad.link — SO good, right?");
        for t in &out.tokens {
            assert!(
                t.chars().all(char::is_alphanumeric),
                "non-alphanumeric token survived: {t:?}"
            );
            assert_eq!(&t.to_lowercase(), t, "uppercase token survived: {t:?}");
        }
    }

    #[test]
    fn test_contraction_dropped_by_punctuation_stage() {
        // The documented quirk: "don't" survives tokenization but dies
        // at punctuation removal, so contraction expansion sees nothing.
        let n = Normalizer::english().with_stopwords(Vec::new());
        let out = n.normalize("don't");
        assert!(out.tokens.is_empty(), "got {:?}", out.tokens);
    }

    #[test]
    fn test_reordered_stages_expand_contractions() {
        // Moving expansion ahead of punctuation removal makes it
        // observable — the engine supports trying the corrected order.
        let n = Normalizer::english()
            .with_stopwords(Vec::new())
            .with_stages(vec![
                Stage::StripUrls,
                Stage::Lowercase,
                Stage::Tokenize,
                Stage::ExpandContractions,
            ]);
        let out = n.normalize("don't");
        assert_eq!(out.tokens, vec!["do not"]);
    }

    #[test]
    fn test_token_order_preserved() {
        let n = Normalizer::english().with_stopwords(Vec::new());
        // None of these stem, lemmatize, or have synset entries, and
        // the stopword set is empty — the sequence must come out intact.
        let out = n.normalize("alpha bravo delta omega");
        assert_eq!(out.tokens, vec!["alpha", "bravo", "delta", "omega"]);
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let n = Normalizer::english().with_stopwords(Vec::new());
        let out = n.normalize("zxqv");
        assert_eq!(out.tokens, vec!["zxqv"]);
    }

    #[test]
    fn test_empty_input() {
        let n = Normalizer::english();
        let out = n.normalize("");
        assert!(out.tokens.is_empty());
        assert_eq!(out.text, "");
    }
}
