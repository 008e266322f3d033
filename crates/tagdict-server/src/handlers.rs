//! Request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tagdict_core::TagDictionary;

use crate::db;
use crate::error::ApiError;
use crate::state::{AppState, CONVERTER_PAGE};

/// `GET /` - the converter page.
pub async fn index(State(state): State<AppState>) -> Response {
    converter_page(&state).await
}

/// `GET /{filename}` - single-file static route. Only the converter page
/// itself is ever served; any other name is a plain 404 even when a file
/// by that name exists on disk.
pub async fn serve_file(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    if filename == CONVERTER_PAGE {
        converter_page(&state).await
    } else {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }
}

/// `GET /api/get_data` - tags and thresholds as one combined payload.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<TagDictionary>, ApiError> {
    let dictionary = db::fetch_dictionary(state.config()).await?;
    Ok(Json(dictionary))
}

async fn converter_page(state: &AppState) -> Response {
    match tokio::fs::read(state.page_path()).await {
        Ok(contents) => Html(contents).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            format!("{CONVERTER_PAGE} not found. Place it next to the server executable."),
        )
            .into_response(),
    }
}
