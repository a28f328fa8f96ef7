//! Per-request logging for the GraphQL endpoint and status route.

use super::super::state::ServerState;
use axum::extract::State;
use axum::{
    body::Body,
    http::{header::HeaderMap, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Bodies at or above this many bytes are summarized, not printed.
const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

/// Declared body length, or why it can't be used.
fn content_length(headers: &HeaderMap) -> Result<usize, &'static str> {
    headers
        .get("content-length")
        .ok_or("Content-length not set.")?
        .to_str()
        .map_err(|_| "Could not get Content-length string value.")?
        .parse::<usize>()
        .map_err(|_| "Could not parse Content-length numeric value.")
}

fn log_headers(side: &str, headers: &HeaderMap) {
    info!("  {} Headers:", side);
    for (name, value) in headers.iter() {
        info!("    {:?}: {:?}", name, value);
    }
}

/// Logs a body and hands back an equivalent one, buffering only small bodies.
async fn log_body(side: &str, headers: &HeaderMap, body: Body) -> Result<Body, axum::Error> {
    match content_length(headers) {
        Err(reason) => {
            info!("  {} Body: {}", side, reason);
            Ok(body)
        }
        Ok(size) if size >= MAX_LOGGABLE_BODY_LENGTH => {
            info!(
                "  {} Body: Too big to log ({:#})",
                side,
                byte_unit::Byte::from(size)
            );
            Ok(body)
        }
        Ok(size) => {
            let bytes = axum::body::to_bytes(body, size).await?;
            info!("  {} Body:\n{}", side, String::from_utf8_lossy(&bytes));
            Ok(Body::from(bytes))
        }
    }
}

fn internal_error() -> Response<Body> {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

pub async fn log_requests(
    State(state): State<ServerState>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let level = state.config.requests_logging_level;
    if level == RequestsLoggingLevel::None {
        return next.run(request).await;
    }

    let start = Instant::now();
    info!(">>> {} {}", request.method(), request.uri());

    let mut request = request;
    if level >= RequestsLoggingLevel::Headers {
        log_headers("Req", request.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = request.into_parts();
        match log_body("Req", &parts.headers, body).await {
            Ok(body) => request = Request::from_parts(parts, body),
            Err(err) => {
                error!("Failed to read request body: {}", err);
                return internal_error();
            }
        }
    }

    let mut response = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = response.into_parts();
        match log_body("Resp", &parts.headers, body).await {
            Ok(body) => response = Response::from_parts(parts, body),
            Err(err) => {
                error!("Failed to read response body: {}", err);
                return internal_error();
            }
        }
    }

    info!(
        "<<< {} ({}ms)",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}
