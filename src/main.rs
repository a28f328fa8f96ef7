use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_graph_server::config::{AppConfig, CliConfig, FileConfig};
use catalog_graph_server::fuzzy::DEFAULT_MIN_SIMILARITY;
use catalog_graph_server::{
    build_schema, run_server, CatalogContext, RequestsLoggingLevel, ServerConfig,
    SqliteCatalogConnector, SubsequenceMatcher,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the Chinook SQLite database file.
    #[clap(long, value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// Path to a TOML config file. Values in it override the CLI ones.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 4000)]
    pub port: u16,

    /// The path the GraphQL endpoint is mounted on.
    #[clap(long, default_value = "/gql")]
    pub graphql_path: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Inclusive minimum similarity for the title and name search filters.
    #[clap(long, default_value_t = DEFAULT_MIN_SIMILARITY)]
    pub min_similarity: f64,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_path: self.db_path.clone(),
            port: self.port,
            graphql_path: self.graphql_path.clone(),
            logging_level: self.logging_level.clone(),
            min_similarity: self.min_similarity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Using catalog database at {:?}", config.db_path);
    let connector = SqliteCatalogConnector::new(&config.db_path);
    let catalog = CatalogContext::new(
        Arc::new(connector),
        Arc::new(SubsequenceMatcher::new()),
        config.min_similarity,
    );
    info!(
        "Search filters keep matches scoring at least {}",
        catalog.min_similarity().value()
    );

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        port: config.port,
        graphql_path: config.graphql_path,
    };
    run_server(server_config, build_schema(catalog)).await
}
