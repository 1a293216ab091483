use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum MonitorError {
    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("password hash error: {0}")]
    PasswordHash(String),
}

/// Every variant reaching the HTTP layer is an internal fault: the client
/// gets a bare 500 string and the detail stays in the server log.
/// User-correctable outcomes (bad form input, bad credentials, wrong role)
/// never become a `MonitorError`; handlers turn those into flash redirects.
impl IntoResponse for MonitorError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
