use super::FuzzyMatcher;
use anyhow::{bail, Result};
use tracing::debug;

pub const DEFAULT_MIN_SIMILARITY: f64 = 0.9;

/// Inclusive lower bound a match score must reach to be kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSimilarity(f64);

impl MinSimilarity {
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            bail!("Minimum similarity must be within [0, 1], got {}", value);
        }
        Ok(MinSimilarity(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn accepts(&self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for MinSimilarity {
    fn default() -> Self {
        MinSimilarity(DEFAULT_MIN_SIMILARITY)
    }
}

/// Keep the items whose `key` text matches `query` at or above `min`.
///
/// The result follows the matcher's ranking order; items are returned whole.
pub fn filter_by_similarity<T, K>(
    matcher: &dyn FuzzyMatcher,
    query: &str,
    items: Vec<T>,
    key: K,
    min: MinSimilarity,
) -> Vec<T>
where
    K: Fn(&T) -> &str,
{
    let ranked = {
        let targets: Vec<&str> = items.iter().map(|item| key(item)).collect();
        matcher.rank(query, &targets)
    };

    let candidates = items.len();
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let kept: Vec<T> = ranked
        .into_iter()
        .filter(|m| min.accepts(m.score))
        .filter_map(|m| slots.get_mut(m.index).and_then(Option::take))
        .collect();

    debug!(
        "Fuzzy filter {:?}: kept {} of {} candidates (min similarity {})",
        query,
        kept.len(),
        candidates,
        min.value()
    );
    kept
}
