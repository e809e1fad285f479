//! Same-origin reverse proxy for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/...` on this host so it never needs CORS or the
//! backend's address. Each request is replayed against `BACKEND_URL` with the
//! method, query, body and the headers the REST client sends; the backend's
//! status, content type and body come back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed to the backend.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or dropped the connection.
    #[error("backend unavailable: {0}")]
    Unreachable(String),
    /// The backend did not answer within `BACKEND_TIMEOUT_SECS`.
    #[error("backend timed out")]
    Timeout,
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Path below `/api`, still percent-encoded as the browser sent it.
pub(crate) fn backend_path(request_path: &str) -> &str {
    request_path.strip_prefix("/api").unwrap_or(request_path)
}

/// `{backend}/{path}[?query]`.
pub(crate) fn target_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{backend}/{path}?{q}"),
        None => format!("{backend}/{path}"),
    }
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = backend_path(uri.path());
    let url = target_url(&state.backend_url, path, uri.query());
    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "backend request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %path, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    } else {
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    Ok(response)
}
