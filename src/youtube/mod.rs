// YouTube Data API boundary — link parsing, HTTP client, comment fetching.
//
// Everything in here is I/O glue around the core pipeline. Each submodule
// handles one area of the Data API surface.

pub mod client;
pub mod comments;
pub mod link;
