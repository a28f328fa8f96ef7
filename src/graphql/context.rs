use super::error::{FetchBoundary, FetchError, FetchTarget};
use crate::catalog_store::{CatalogConnection, CatalogConnector};
use crate::fuzzy::{filter_by_similarity, FuzzyMatcher, MinSimilarity};
use std::sync::Arc;

/// Everything resolvers need, stored as schema data.
///
/// Holds no connection: every traversal opens its own through `connect`.
#[derive(Clone)]
pub struct CatalogContext {
    connector: Arc<dyn CatalogConnector>,
    matcher: Arc<dyn FuzzyMatcher>,
    min_similarity: MinSimilarity,
}

impl CatalogContext {
    pub fn new(
        connector: Arc<dyn CatalogConnector>,
        matcher: Arc<dyn FuzzyMatcher>,
        min_similarity: MinSimilarity,
    ) -> Self {
        CatalogContext {
            connector,
            matcher,
            min_similarity,
        }
    }

    pub fn min_similarity(&self) -> MinSimilarity {
        self.min_similarity
    }

    pub(crate) async fn connect(
        &self,
        target: FetchTarget,
    ) -> Result<Box<dyn CatalogConnection>, FetchError> {
        self.connector.connect().await.or_fetch_error(target)
    }

    pub(crate) fn fuzzy_filter<T, K>(&self, query: &str, items: Vec<T>, key: K) -> Vec<T>
    where
        K: Fn(&T) -> &str,
    {
        filter_by_similarity(
            self.matcher.as_ref(),
            query,
            items,
            key,
            self.min_similarity,
        )
    }
}
