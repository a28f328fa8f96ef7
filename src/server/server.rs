use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::{log_requests, state::*, ServerConfig};
use crate::graphql::CatalogSchema;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    };
    Json(stats)
}

async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql(State(config): State<ServerConfig>) -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(&config.graphql_path)
            .finish(),
    )
}

impl ServerState {
    fn new(config: ServerConfig, schema: CatalogSchema) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            schema,
        }
    }
}

pub fn make_app(config: ServerConfig, schema: CatalogSchema) -> Result<Router> {
    let state = ServerState::new(config.clone(), schema);

    let app: Router = Router::new()
        .route("/", get(home))
        .route(&config.graphql_path, get(graphiql).post(graphql_handler))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state);

    Ok(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, schema: CatalogSchema) -> Result<()> {
    let app = make_app(config.clone(), schema)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    info!(
        "Server ready at http://localhost:{}{}",
        config.port, config.graphql_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
