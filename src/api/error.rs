//! Error responses: `{ "error": { status, message, requestId } }`

use super::middleware::RequestContext;
use crate::core::service::ServiceError;
use crate::error;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// An error ready to be sent to the client
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status
    pub status: StatusCode,
    /// Client-facing message
    pub message: String,
    /// Correlation id of the failed request
    pub request_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
    request_id: &'a str,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

impl ApiError {
    /// Build an error for the current request
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, ctx: &RequestContext) -> Self {
        Self {
            status,
            message: message.into(),
            request_id: ctx.request_id.clone(),
        }
    }

    /// 404 for paths no route matches
    #[must_use]
    pub fn route_not_found(ctx: &RequestContext) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Resource not found", ctx)
    }

    /// 500 with a generic message; the cause is logged, never sent
    #[must_use]
    pub fn internal(cause: &dyn std::fmt::Display, ctx: &RequestContext) -> Self {
        error!("[{}] {} failed: {cause}", ctx.request_id, ctx.path);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", ctx)
    }

    /// Map a service failure onto its HTTP status
    #[must_use]
    pub fn from_service(err: ServiceError, ctx: &RequestContext) -> Self {
        match err {
            ServiceError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message, ctx),
            ServiceError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message, ctx),
            ServiceError::Store(cause) => Self::internal(&cause, ctx),
        }
    }

    /// A path segment that could not be extracted, e.g. an invalid percent-escape
    #[must_use]
    pub fn from_path_rejection(rejection: &PathRejection, ctx: &RequestContext) -> Self {
        Self::new(rejection.status(), rejection.body_text(), ctx)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            error: ErrorBody {
                status: self.status.as_u16(),
                message: &self.message,
                request_id: &self.request_id,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::StoreError;

    fn ctx() -> RequestContext {
        RequestContext {
            request_id: "req-9".to_string(),
            path: "/api/v1/courses/x".to_string(),
            base_url: "http://localhost/api/v1".to_string(),
        }
    }

    #[test]
    fn test_service_error_statuses() {
        let validation = ApiError::from_service(
            ServiceError::Validation("Course id is required.".to_string()),
            &ctx(),
        );
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.message, "Course id is required.");

        let missing =
            ApiError::from_service(ServiceError::NotFound("Course not found".to_string()), &ctx());
        assert_eq!(missing.status, StatusCode::NOT_FOUND);

        let store = ApiError::from_service(
            ServiceError::Store(StoreError::Unavailable("db gone".to_string())),
            &ctx(),
        );
        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.message, "Internal server error");
        assert_eq!(store.request_id, "req-9");
    }
}
