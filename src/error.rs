// Typed errors for the two failure modes that must abort a run.
//
// Everything else in the pipeline either passes through unchanged
// (normalization lookup misses) or degrades to partial results
// (upstream fetch failures, see youtube::comments).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input string matched neither recognized video-link shape.
    /// The pipeline must not run — the caller shows a validation message.
    #[error("not a recognized YouTube video link: {0}")]
    InvalidReference(String),

    /// The keyword list could not be read. This must propagate rather
    /// than fall back to an empty set — an empty set would silently
    /// classify everything as non-abusive.
    #[error("could not load keyword list from {}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
