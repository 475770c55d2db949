//! Repository for the `records` table.

use sqlx::PgPool;

use jilu_core::types::DbId;

use crate::models::record::{CreateRecord, Record, UpdateRecord};

/// Column list for records queries.
const COLUMNS: &str = "id, date, title, content, status, created_at";

/// Provides CRUD operations for records.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record. The id is assigned by the sequence.
    ///
    /// `date` is bound as text and cast server-side so malformed values
    /// are rejected by the database rather than pre-validated here.
    pub async fn create(pool: &PgPool, input: &CreateRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO records (date, title, content, status)
             VALUES ($1::date, $2, $3, $4)",
        )
        .bind(&input.date)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Fetch all records, newest date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records ORDER BY date DESC");
        sqlx::query_as::<_, Record>(&query).fetch_all(pool).await
    }

    /// Overwrite all four mutable fields of the record matching `id`.
    ///
    /// Returns `true` if a row matched. An unknown id is not an error;
    /// callers decide whether to surface the miss.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecord,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE records SET date = $2::date, title = $3, content = $4, status = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.date)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the record matching `id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
