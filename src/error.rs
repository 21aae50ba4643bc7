use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Convenience alias for proxy handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced as JSON error payloads by the authenticated API routes.
///
/// OAuth-flow failures (provider error, missing code, state mismatch, exchange
/// failure) are not represented here: those paths always answer with a redirect
/// to the error page instead of a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access-token cookie was present on the request. Raised before any
    /// upstream call is attempted.
    #[error("No access token found")]
    Unauthenticated,

    /// The upstream API answered with a non-success status. The status is
    /// forwarded; the upstream body is logged server-side only.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The upstream request could not be performed at all.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The upstream data was present but empty where content was required.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Transport(_) => StatusCode::BAD_GATEWAY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
