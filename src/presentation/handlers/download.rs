use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::application::services::CloneError;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.clone_service.download(&filename).await {
        Ok(stream) => {
            tracing::debug!("Streaming converted clip");
            (
                [
                    (header::CONTENT_TYPE, "audio/wav".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                Body::from_stream(stream),
            )
                .into_response()
        }
        Err(e @ (CloneError::NotFound(_) | CloneError::InvalidArtifactName(_))) => {
            tracing::warn!(error = %e, "Download rejected");
            e.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Download failed");
            e.into_response()
        }
    }
}
