//! Request middleware: correlation context, access logging, and security headers

use super::{AppState, ServerSettings};
use crate::info;
use axum::extract::{Request, State};
use axum::http::header::{HOST, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Header carrying the correlation id, in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Per-request data made available to handlers as an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation id (client supplied or generated)
    pub request_id: String,
    /// Request path as received
    pub path: String,
    /// Absolute API root, without trailing slash
    pub base_url: String,
}

impl RequestContext {
    /// Absolute URL for an API resource path such as `/courses/c1`
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Reuse a well-formed client id, otherwise mint a new one
#[must_use]
pub fn pick_request_id(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string)
}

/// API root for link building: the configured public URL if any, else the request's host
#[must_use]
pub fn resolve_base_url(settings: &ServerSettings, host: Option<&str>) -> String {
    let origin = if settings.public_url.is_empty() {
        let authority = host
            .filter(|h| !h.is_empty())
            .map_or_else(|| format!("{}:{}", settings.host, settings.port), str::to_string);
        format!("http://{authority}")
    } else {
        settings.public_url.trim_end_matches('/').to_string()
    };
    format!("{origin}{}", settings.base_path)
}

/// Attach a [`RequestContext`] and echo the request id on the response
pub async fn request_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let request_id = pick_request_id(
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    let base_url = resolve_base_url(
        &state.settings,
        headers.get(HOST).and_then(|v| v.to_str().ok()),
    );
    let ctx = RequestContext {
        request_id: request_id.clone(),
        path: request.uri().path().to_string(),
        base_url,
    };
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// One info line per request: method, path, status, elapsed time
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();

    let response = next.run(request).await;
    info!(
        "{method} {path} -> {} ({} ms) [{request_id}]",
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

/// Baseline hardening headers on every response
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(public_url: &str) -> ServerSettings {
        ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3010,
            base_path: "/api/v1".to_string(),
            public_url: public_url.to_string(),
        }
    }

    #[test]
    fn test_request_id_reused_when_valid() {
        assert_eq!(pick_request_id(Some("abc-123")), "abc-123");
    }

    #[test]
    fn test_request_id_generated_otherwise() {
        let generated = pick_request_id(None);
        assert_eq!(generated.len(), 36);
        assert_ne!(pick_request_id(Some("  ")), "");
        assert_ne!(pick_request_id(Some("has space")), "has space");
        assert_eq!(pick_request_id(Some(&"x".repeat(200))).len(), 36);
    }

    #[test]
    fn test_base_url_from_host_header() {
        assert_eq!(
            resolve_base_url(&settings(""), Some("example.org:8080")),
            "http://example.org:8080/api/v1"
        );
        assert_eq!(
            resolve_base_url(&settings(""), None),
            "http://127.0.0.1:3010/api/v1"
        );
    }

    #[test]
    fn test_base_url_prefers_public_url() {
        assert_eq!(
            resolve_base_url(&settings("https://catalog.example.org/"), Some("internal:3010")),
            "https://catalog.example.org/api/v1"
        );
    }

    #[test]
    fn test_resource_url() {
        let ctx = RequestContext {
            request_id: "r".to_string(),
            path: "/api/v1/courses".to_string(),
            base_url: "http://h/api/v1".to_string(),
        };
        assert_eq!(ctx.resource_url("/courses/c1"), "http://h/api/v1/courses/c1");
    }
}
