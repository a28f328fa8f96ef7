//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own catalog database.

use super::constants::*;
use super::fixtures::create_test_catalog;
use catalog_graph_server::server::make_app;
use catalog_graph_server::{
    build_schema, CatalogContext, MinSimilarity, RequestsLoggingLevel, ServerConfig,
    SqliteCatalogConnector, SubsequenceMatcher,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down and the catalog is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The catalog database the server reads, for tests that tamper with it
    pub db_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with the default search threshold
    pub async fn spawn() -> Self {
        Self::spawn_with_min_similarity(MinSimilarity::default()).await
    }

    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the catalog can't be created, the port can't be bound or the
    /// server doesn't become ready within timeout.
    pub async fn spawn_with_min_similarity(min_similarity: MinSimilarity) -> Self {
        let (temp_catalog_dir, db_path) =
            create_test_catalog().expect("Failed to create test catalog");

        let catalog = CatalogContext::new(
            Arc::new(SqliteCatalogConnector::new(&db_path)),
            Arc::new(SubsequenceMatcher::new()),
            min_similarity,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            graphql_path: GRAPHQL_PATH.to_string(),
        };
        let app = make_app(config, build_schema(catalog)).expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            db_path,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the status route
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
