use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Route serving GraphQL requests (POST) and GraphiQL (GET).
    pub graphql_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 4000,
            graphql_path: "/gql".to_string(),
        }
    }
}
