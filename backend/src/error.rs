use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Bad upload: {0}")]
    BadUpload(String),

    /// The blocking sampler task panicked or was cancelled.
    #[error("Sampling failed")]
    Sampling(#[from] JoinError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match &self {
            BackendError::BadUpload(_) => StatusCode::BAD_REQUEST,
            // Oversized bodies surface here as 413.
            BackendError::Multipart(e) => e.status(),
            BackendError::Sampling(e) => {
                error!("Sampler task failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_upload_is_400() {
        let response = BackendError::BadUpload("Missing file".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sampling_failure_is_500() {
        let join_error = tokio::task::spawn_blocking(|| -> u32 { panic!("sampler blew up") })
            .await
            .unwrap_err();
        let err = BackendError::from(join_error);
        assert_eq!(err.to_string(), "Sampling failed");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
