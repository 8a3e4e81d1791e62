use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request, State,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    /// A path segment or JSON body the extractors could not decode.
    #[error("invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

/// Detail of a failed request, carried as a response extension so that a
/// store error never reaches the body.
#[derive(Debug, Clone)]
pub struct FailureDetail(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, detail) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "Resource not found".to_string(),
                None,
            ),
            ApiError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(err.to_string()),
            ),
            ApiError::InvalidRequest { status, message } => (status, message.clone(), Some(message)),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        let mut response = (status, body).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(FailureDetail(detail));
        }
        response
    }
}

/// Logs every failed request: rejected input at warn, store failures at
/// error. The store's detail is only written out in development.
pub async fn report_failures(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    if let Some(FailureDetail(detail)) = response.extensions().get::<FailureDetail>() {
        if response.status().is_client_error() {
            tracing::warn!(%method, %uri, status = %response.status(), error = %detail, "request rejected");
        } else if state.environment.is_development() {
            tracing::error!(%method, %uri, status = %response.status(), error = %detail, "request failed");
        } else {
            tracing::error!(%method, %uri, status = %response.status(), "request failed");
        }
    }

    response
}
