//! Mapping of tracker errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};
use serde_json::json;
use taskboard_core::TrackerError;

/// Error returned by every API handler and extractor.
///
/// Renders as `{"status": "error", "message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Tracker(TrackerError),
    /// Body or path parameters that could not be decoded
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Tracker(TrackerError::InvalidInput { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Tracker(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Tracker(e) if e.is_conflict() => StatusCode::CONFLICT,
            Self::Tracker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Tracker(TrackerError::ResourceExists { .. }) => {
                "Resource already exists".to_string()
            }
            Self::Tracker(other) => other.to_string(),
            Self::BadRequest(message) => message.clone(),
        }
    }
}

impl From<TrackerError> for ApiError {
    fn from(error: TrackerError) -> Self {
        Self::Tracker(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            error!("{message}");
        } else {
            debug!("{status}: {message}");
        }

        (status, Json(json!({ "status": "error", "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (TrackerError::TaskNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (TrackerError::ProjectNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (
                TrackerError::DuplicateLink {
                    task_id: 1,
                    resource_id: 2,
                },
                StatusCode::CONFLICT,
            ),
            (
                TrackerError::invalid_input("Duration").with_reason("must not be negative"),
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::Configuration {
                    message: "join".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::Tracker(error).status_code(), expected);
        }
    }

    #[test]
    fn test_duplicate_resource_message() {
        let error = ApiError::Tracker(TrackerError::ResourceExists {
            description: "Saw".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
        assert_eq!(error.message(), "Resource already exists");
    }

    #[test]
    fn test_bad_request_message_passes_through() {
        let error = ApiError::BadRequest("Failed to deserialize the JSON body".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Failed to deserialize the JSON body");
    }
}
