//! Fuzzy text matching for the top-level listings.
//!
//! The matcher ranks candidate strings against a query; the threshold filter
//! decides which ranked candidates are kept.

mod filter;
mod subsequence;

pub use filter::{filter_by_similarity, MinSimilarity, DEFAULT_MIN_SIMILARITY};
pub use subsequence::SubsequenceMatcher;

/// A ranked candidate: its similarity score and its index in the input slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    /// Similarity in `[0, 1]`, higher is closer.
    pub score: f64,
    pub index: usize,
}

/// Ranks candidates against a query string.
///
/// Implementations return matches sorted by descending score. Candidates that
/// do not match at all may be left out.
pub trait FuzzyMatcher: Send + Sync {
    fn rank(&self, query: &str, targets: &[&str]) -> Vec<ScoredMatch>;
}
