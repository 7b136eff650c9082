use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::CloneError;

/// Response header naming the error kind, alongside the plain-text message.
pub const ERROR_KIND_HEADER: &str = "x-error-kind";

impl CloneError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CloneError::MissingInput | CloneError::InvalidArtifactName(_) => {
                StatusCode::BAD_REQUEST
            }
            CloneError::Segmentation(_) | CloneError::ModelLoad { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CloneError::NotFound(_) => StatusCode::NOT_FOUND,
            CloneError::Inference { .. } | CloneError::Storage(_) | CloneError::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CloneError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(ERROR_KIND_HEADER, self.kind())],
            self.to_string(),
        )
            .into_response()
    }
}
