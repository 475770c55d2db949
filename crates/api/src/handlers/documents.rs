//! Handlers for the document endpoints.
//!
//! Each handler delegates to exactly one [`DocumentStore`] operation and
//! wraps the result in the standard response envelope.
//!
//! [`DocumentStore`]: crate::documents::DocumentStore

use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::{Ack, Payload};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Body for POST /api/save-document.
#[derive(Debug, Deserialize)]
pub struct SaveDocument {
    pub filename: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Query string carrying a single filename.
#[derive(Debug, Deserialize)]
pub struct FilenameParam {
    pub filename: String,
}

/// Body for POST /api/rename-document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameDocument {
    pub old_name: String,
    pub new_name: String,
}

/// Payload for a successful save.
#[derive(Debug, Serialize)]
pub struct SavedDocument {
    pub filename: String,
}

/// Payload for a successful load.
#[derive(Debug, Serialize)]
pub struct DocumentContent {
    pub content: String,
}

/// Payload for a directory listing.
#[derive(Debug, Serialize)]
pub struct DocumentList {
    pub files: Vec<String>,
}

/// Payload for a successful upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub filename: String,
    pub file_url: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/upload-document
///
/// Accepts a multipart form with a `file` field and stores it under a
/// sanitized filename.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let client_name = field.file_name().unwrap_or_default().to_string();
        if client_name.is_empty() {
            return Err(AppError::BadRequest("No selected file".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let filename = state.documents.store_upload(&client_name, &data).await?;

        tracing::info!(%filename, size = data.len(), "Document uploaded");

        return Ok(Json(Payload::success(UploadedDocument {
            file_url: format!("/documents/{filename}"),
            filename,
        })));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// POST /api/save-document
///
/// Saves Markdown content, deriving a timestamp-based name when none is
/// supplied.
pub async fn save_document(
    State(state): State<AppState>,
    Json(input): Json<SaveDocument>,
) -> AppResult<impl IntoResponse> {
    let filename = state.documents.save(input.filename, &input.content).await?;

    Ok(Json(Payload::success(SavedDocument { filename })))
}

/// GET /api/load-document?filename=
pub async fn load_document(
    State(state): State<AppState>,
    Query(params): Query<FilenameParam>,
) -> AppResult<impl IntoResponse> {
    let content = state.documents.load(&params.filename).await?;

    Ok(Json(Payload::success(DocumentContent { content })))
}

/// GET /api/list-documents
pub async fn list_documents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let files = state.documents.list().await?;

    Ok(Json(Payload::success(DocumentList { files })))
}

/// DELETE /api/delete-document?filename=
pub async fn delete_document(
    State(state): State<AppState>,
    Query(params): Query<FilenameParam>,
) -> AppResult<impl IntoResponse> {
    state.documents.delete(&params.filename).await?;

    tracing::info!(filename = %params.filename, "Document deleted");

    Ok(Json(Ack::success()))
}

/// POST /api/rename-document
pub async fn rename_document(
    State(state): State<AppState>,
    Json(input): Json<RenameDocument>,
) -> AppResult<impl IntoResponse> {
    state
        .documents
        .rename(&input.old_name, &input.new_name)
        .await?;

    tracing::info!(from = %input.old_name, to = %input.new_name, "Document renamed");

    Ok(Json(Ack::success()))
}
