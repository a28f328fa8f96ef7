//! Catalog Graph Server Library
//!
//! Serves a read-only music catalog over GraphQL. Exposed as a library for
//! the end-to-end tests.

pub mod catalog_store;
pub mod config;
pub mod fuzzy;
pub mod graphql;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogConnector, SqliteCatalogConnector};
pub use fuzzy::{FuzzyMatcher, MinSimilarity, SubsequenceMatcher};
pub use graphql::{build_schema, CatalogContext, CatalogSchema};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
