//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with helpers for the GraphQL endpoint. When the endpoint
//! or request format changes, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_status(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Status request failed")
    }

    /// GET the GraphQL endpoint, which serves the GraphiQL IDE
    pub async fn get_graphiql(&self) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, GRAPHQL_PATH))
            .send()
            .await
            .expect("GraphiQL request failed")
    }

    /// POST a query and return the raw response
    pub async fn graphql(&self, query: &str) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, GRAPHQL_PATH))
            .json(&json!({ "query": query }))
            .send()
            .await
            .expect("GraphQL request failed")
    }

    /// POST a query and return the whole response body as JSON
    pub async fn graphql_json(&self, query: &str) -> Value {
        let response = self.graphql(query).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Response was not JSON")
    }

    /// POST a query expected to succeed and return its `data`
    pub async fn graphql_ok(&self, query: &str) -> Value {
        let body = self.graphql_json(query).await;
        assert!(
            body.get("errors").is_none(),
            "unexpected errors for {}: {}",
            query,
            body
        );
        body["data"].clone()
    }
}
