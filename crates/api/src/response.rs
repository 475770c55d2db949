//! Shared response envelope types for API handlers.
//!
//! Every endpoint replies with `{ "status": "success", ... }` on success;
//! the matching `{ "status": "error", "message": ... }` half lives in
//! [`crate::error`]. Use these types instead of ad-hoc
//! `serde_json::json!` so payload shapes stay typed.

use serde::Serialize;

/// Bare `{ "status": "success" }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub status: &'static str,
}

impl Ack {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// `{ "status": "success", ...payload }` envelope.
///
/// The payload struct's fields are flattened alongside `status`.
#[derive(Debug, Serialize)]
pub struct Payload<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Payload<T> {
    pub fn success(body: T) -> Self {
        Self {
            status: "success",
            body,
        }
    }
}
