//! Record model: the `records` table row plus its DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use jilu_core::dates;
use jilu_core::types::{DbId, Timestamp};

/// A row from the `records` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Record {
    pub id: DbId,
    #[serde(serialize_with = "iso_date")]
    pub date: NaiveDate,
    pub title: String,
    pub content: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Dates cross the API boundary in canonical `YYYY-MM-DD` form.
fn iso_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dates::iso_date_string(*date))
}

/// DTO for inserting a record.
///
/// `date` is normalized by the handler; values the normalizer passed
/// through unchanged are left for the database to reject.
#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub date: Option<String>,
    pub title: String,
    pub content: Option<String>,
    pub status: String,
}

/// DTO for a full-field update. Every mutable column is overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateRecord {
    pub date: Option<String>,
    pub title: String,
    pub content: Option<String>,
    pub status: String,
}
