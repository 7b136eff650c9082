use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::services::{CloneError, CloneRequest};
use crate::domain::UploadedFile;
use crate::presentation::state::AppState;
use crate::presentation::views::results_page;

use super::error_response::ERROR_KIND_HEADER;

#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let request = match read_clone_request(&mut multipart).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                [(ERROR_KIND_HEADER, "bad_request")],
                format!("Failed to read upload: {}", e),
            )
                .into_response();
        }
    };

    if request.audio.is_none() || request.models.is_empty() {
        tracing::warn!(
            has_audio = request.audio.is_some(),
            models = request.models.len(),
            "Process request missing audio or models"
        );
        return CloneError::MissingInput.into_response();
    }

    tracing::debug!(
        models = request.models.len(),
        indexes = request.indexes.len(),
        "Upload received"
    );

    match state.clone_service.process(request).await {
        Ok(outcome) => Html(results_page(&outcome)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Voice conversion failed");
            e.into_response()
        }
    }
}

/// Collects `audio` (first non-empty wins), `models` and `indexes` in upload
/// order.
async fn read_clone_request(multipart: &mut Multipart) -> Result<CloneRequest, MultipartError> {
    let mut request = CloneRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await?;

        // Untouched file inputs arrive with no filename; named empty files are
        // kept so they fail validation in their slot.
        if filename.as_deref().is_none_or(str::is_empty) {
            continue;
        }
        let file = UploadedFile::new(filename, data);

        match name.as_str() {
            "audio" if request.audio.as_ref().is_none_or(UploadedFile::is_empty) => {
                request.audio = Some(file)
            }
            "models" => request.models.push(file),
            "indexes" => request.indexes.push(file),
            other => tracing::debug!(field = other, "Ignoring multipart field"),
        }
    }

    Ok(request)
}
