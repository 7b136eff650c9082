use axum::response::{Html, IntoResponse};

use crate::presentation::views::upload_form_page;

pub async fn index_handler() -> impl IntoResponse {
    Html(upload_form_page())
}
