// Video-id extraction from user-supplied links.
//
// Two link shapes are recognized: the watch-page form
// (youtube.com/watch?v=ID) and the short-link form (youtu.be/ID).
// Anything else is rejected before the pipeline runs.

use regex_lite::Regex;

use crate::error::Error;

/// Extract the video id from a YouTube link.
///
/// Returns `Error::InvalidReference` when the string matches neither
/// shape — the caller shows a validation message and never fetches.
pub fn extract_video_id(video_link: &str) -> Result<String, Error> {
    // Anchored at the start; ids are the usual [A-Za-z0-9_-] alphabet.
    let patterns = [
        r"^https?://(?:www\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]+)",
        r"^https?://(?:www\.)?youtu\.be/([a-zA-Z0-9_-]+)",
    ];

    for pattern in patterns {
        // The patterns are fixed literals, so compilation cannot fail.
        let re = Regex::new(pattern).unwrap();
        if let Some(captures) = re.captures(video_link) {
            if let Some(id) = captures.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }

    Err(Error::InvalidReference(video_link.to_string()))
}
