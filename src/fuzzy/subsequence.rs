//! Default matcher: ordered-subsequence filtering with similarity scoring.

use super::{FuzzyMatcher, ScoredMatch};

/// Score for a contiguous match starting at a word boundary, before coverage.
const WORD_START_BASE: f64 = 0.9;
/// Score for a contiguous match inside a word, before coverage.
const INNER_BASE: f64 = 0.8;
/// Share of the score given by how much of the target the query covers.
const COVERAGE_WEIGHT: f64 = 0.1;
/// Upper bound for scattered (non-contiguous) subsequence matches.
const SCATTERED_WEIGHT: f64 = 0.8;

/// Case-insensitive matcher in the spirit of editor "go to file" search.
///
/// A target only matches if it contains every query character in order.
/// Exact matches score 1.0, contiguous matches score in `[0.8, 1.0)`
/// depending on where they start and how much of the target they cover, and
/// scattered matches score below 0.8.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsequenceMatcher;

impl SubsequenceMatcher {
    pub fn new() -> Self {
        SubsequenceMatcher
    }

    /// Score a single target, `None` when it doesn't match at all.
    pub fn score(&self, query: &str, target: &str) -> Option<f64> {
        let query = query.trim().to_lowercase();
        let target = target.to_lowercase();

        if query.is_empty() {
            return None;
        }
        if query == target {
            return Some(1.0);
        }
        if !is_subsequence(&query, &target) {
            return None;
        }

        if let Some(pos) = target.find(&query) {
            let coverage = query.chars().count() as f64 / target.chars().count() as f64;
            let base = if is_word_start(&target, pos) {
                WORD_START_BASE
            } else {
                INNER_BASE
            };
            // coverage < 1 here since exact equality was handled above
            return Some(base + COVERAGE_WEIGHT * coverage);
        }

        Some(SCATTERED_WEIGHT * strsim::jaro_winkler(&query, &target))
    }
}

impl FuzzyMatcher for SubsequenceMatcher {
    fn rank(&self, query: &str, targets: &[&str]) -> Vec<ScoredMatch> {
        let mut matches: Vec<ScoredMatch> = targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                self.score(query, target)
                    .map(|score| ScoredMatch { score, index })
            })
            .collect();

        // stable: equal scores keep candidate order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|c| haystack.any(|h| h == c))
}

fn is_word_start(text: &str, byte_pos: usize) -> bool {
    match text[..byte_pos].chars().next_back() {
        None => true,
        Some(prev) => !prev.is_alphanumeric(),
    }
}
