// The classify loop: one ClassificationResult per comment, input order
// preserved, no state carried between comments.

use serde::Serialize;
use tracing::debug;

use crate::keywords::KeywordSet;
use crate::normalize::Normalizer;
use crate::youtube::comments::Comment;

/// The verdict for one comment. Produced exactly once, never mutated.
/// Serializes for the `--json` output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// The comment text after URL stripping and lowercasing.
    pub comment: String,
    /// The final normalized token sequence.
    pub tokens: Vec<String>,
    /// True iff any token exactly matches a keyword.
    pub abusive: bool,
    /// Display metadata carried through from the fetch.
    pub author: Option<String>,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub like_count: i64,
}

/// Classify a batch of comments against a keyword set.
///
/// Each comment runs independently through the normalizer and the
/// keyword match; normalization is pure and infallible, so the output
/// always has exactly one result per input, in input order.
pub fn classify_comments(
    comments: &[Comment],
    normalizer: &Normalizer,
    keywords: &KeywordSet,
) -> Vec<ClassificationResult> {
    comments
        .iter()
        .map(|comment| {
            let normalized = normalizer.normalize(&comment.text);
            let abusive = keywords.is_abusive(&normalized.tokens);

            debug!(
                abusive = abusive,
                tokens = normalized.tokens.len(),
                "Classified comment"
            );

            ClassificationResult {
                comment: normalized.text,
                tokens: normalized.tokens,
                abusive,
                author: comment.author.clone(),
                published_at: comment.published_at,
                like_count: comment.like_count,
            }
        })
        .collect()
}

/// Classify a single raw string — the `check` command and tests use
/// this to exercise the pipeline without a fetched Comment.
pub fn classify_text(
    text: &str,
    normalizer: &Normalizer,
    keywords: &KeywordSet,
) -> ClassificationResult {
    let normalized = normalizer.normalize(text);
    let abusive = keywords.is_abusive(&normalized.tokens);
    ClassificationResult {
        comment: normalized.text,
        tokens: normalized.tokens,
        abusive,
        author: None,
        published_at: None,
        like_count: 0,
    }
}
