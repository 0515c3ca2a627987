// Pipeline orchestration — run fetched comments through normalization
// and classification.

pub mod analyze;
