mod context;
mod error;
mod query;
mod types;


pub use context::CatalogContext;
pub use error::{FetchBoundary, FetchError, FetchTarget};
pub use query::QueryRoot;
pub use types::{Album, Artist, Track};

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(catalog: CatalogContext) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}
