pub mod documents;
pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /upload-document       POST    multipart upload
/// /save-document         POST    save Markdown content
/// /load-document         GET     ?filename=
/// /list-documents        GET     newest-modified first
/// /delete-document       DELETE  ?filename=
/// /rename-document       POST    {oldName, newName}
///
/// /add-record            POST
/// /get-records           GET     newest date first
/// /update-record/{id}    PUT
/// /delete-record/{id}    DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(documents::router())
        .merge(records::router())
}
