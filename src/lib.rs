// Ember: Abusive comment detection for YouTube.
//
// This is the library root. Each module corresponds to one step of the
// fetch -> normalize -> classify pipeline.

pub mod config;
pub mod error;
pub mod keywords;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod youtube;
