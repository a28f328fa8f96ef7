mod file_config;

pub use file_config::{FileConfig, SearchConfig};

use crate::fuzzy::MinSimilarity;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub port: u16,
    pub graphql_path: String,
    pub logging_level: RequestsLoggingLevel,
    pub min_similarity: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            db_path: None,
            port: 4000,
            graphql_path: "/gql".to_string(),
            logging_level: RequestsLoggingLevel::default(),
            min_similarity: crate::fuzzy::DEFAULT_MIN_SIMILARITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub graphql_path: String,
    pub logging_level: RequestsLoggingLevel,
    pub min_similarity: MinSimilarity,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_path must be specified via --db-path or in config file")
            })?;

        // The catalog is never created, only read
        if !db_path.exists() {
            bail!("Catalog database does not exist: {:?}", db_path);
        }
        if !db_path.is_file() {
            bail!("Catalog database is not a file: {:?}", db_path);
        }

        let port = file.port.unwrap_or(cli.port);

        let graphql_path = file
            .graphql_path
            .unwrap_or_else(|| cli.graphql_path.clone());
        if !graphql_path.starts_with('/') || graphql_path == "/" {
            bail!(
                "GraphQL path must start with '/' and not be the root: {:?}",
                graphql_path
            );
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let min_similarity = file
            .search
            .unwrap_or_default()
            .min_similarity
            .unwrap_or(cli.min_similarity);
        let min_similarity = MinSimilarity::new(min_similarity)?;

        Ok(Self {
            db_path,
            port,
            graphql_path,
            logging_level,
            min_similarity,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
