//! Forwarding of `/api/*` requests to the upstream voyage API.
//!
//! The browser only ever talks to this host. Method, query string,
//! `content-type` and body pass through; upstream status, `content-type` and
//! body come back verbatim so the client sees the API's own error messages.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Voyage API unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        let body = serde_json::json!({ "message": UPSTREAM_UNAVAILABLE_MESSAGE });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Join the upstream base, the `/api/` prefix, the captured path and the raw
/// query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/{path}?{q}"),
        None => format!("{base}/api/{path}"),
    }
}

/// `ANY /api/{*path}`: forward to the configured voyage API.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    if !status.is_success() {
        tracing::info!(%status, %url, "upstream api returned error status");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
