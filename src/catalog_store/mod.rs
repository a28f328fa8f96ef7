mod models;
mod store;
mod trait_def;

pub use models::*;
pub use store::{SqliteCatalogConnection, SqliteCatalogConnector};
pub use trait_def::{CatalogConnection, CatalogConnector, StorageError};
