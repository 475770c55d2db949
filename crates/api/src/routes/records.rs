//! Route definitions for the record store.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Record routes mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-record", post(records::add_record))
        .route("/get-records", get(records::get_records))
        .route("/update-record/{id}", put(records::update_record))
        .route("/delete-record/{id}", delete(records::delete_record))
}
