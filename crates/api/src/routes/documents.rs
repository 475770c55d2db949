//! Route definitions for the document store.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Document routes mounted under `/api`.
///
/// Raw file bytes are served separately via `ServeDir` at `/documents`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload-document", post(documents::upload_document))
        .route("/save-document", post(documents::save_document))
        .route("/load-document", get(documents::load_document))
        .route("/list-documents", get(documents::list_documents))
        .route("/delete-document", delete(documents::delete_document))
        .route("/rename-document", post(documents::rename_document))
}
