use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::errors;

/// Header carrying the shared secret on mutating requests.
pub const TOKEN_HEADER: &str = "token";

#[derive(Clone)]
pub struct TokenAuthState {
    pub token: Arc<str>,
}

impl TokenAuthState {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

pub async fn token_auth(
    State(state): State<TokenAuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let rejection = match extract_token(req.headers()) {
        Some(token) if token == &*state.token => None,
        Some(_) => Some("invalid token"),
        None => Some("missing token"),
    };

    match rejection {
        None => next.run(req).await,
        Some(message) => {
            tracing::warn!(path = %req.uri().path(), reason = message, "rejected unauthenticated request");
            errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
        }
    }
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let token = headers.get(TOKEN_HEADER)?.to_str().ok()?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

/// Log one line per request once the response is ready.
pub async fn log_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, latency_ms, "request completed");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "request completed");
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_trimmed_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("  abc "));
        assert_eq!(extract_token(&headers), Some("abc"));

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("   "));
        assert_eq!(extract_token(&headers), None);
    }
}
