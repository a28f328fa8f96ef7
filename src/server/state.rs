use axum::extract::FromRef;
use std::time::Instant;

use super::ServerConfig;
use crate::graphql::CatalogSchema;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub schema: CatalogSchema,
}

impl FromRef<ServerState> for CatalogSchema {
    fn from_ref(input: &ServerState) -> Self {
        input.schema.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
