use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No input provided.")]
    MissingInput,

    #[error("Could not fetch content from the URL.")]
    FetchFailure,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput | AppError::FetchFailure => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Why a fetch failed. Only ever logged; callers see a single
/// [`AppError::FetchFailure`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("response body was empty")]
    Empty,
}

impl From<FetchError> for AppError {
    fn from(_: FetchError) -> Self {
        AppError::FetchFailure
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_fixed() {
        assert_eq!(AppError::MissingInput.to_string(), "No input provided.");
        assert_eq!(
            AppError::FetchFailure.to_string(),
            "Could not fetch content from the URL."
        );
    }

    #[test]
    fn every_fetch_error_collapses_to_one_kind() {
        let errors = [
            FetchError::Request("dns".into()),
            FetchError::Status(404),
            FetchError::Timeout(std::time::Duration::from_secs(8)),
            FetchError::Body("eof".into()),
            FetchError::Empty,
        ];
        for err in errors {
            assert!(matches!(AppError::from(err), AppError::FetchFailure));
        }
    }

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(AppError::MissingInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::FetchFailure.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ConfigError("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
