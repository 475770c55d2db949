//! Integration tests for the records repository against a real database.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;

use jilu_db::models::record::{CreateRecord, UpdateRecord};
use jilu_db::repositories::RecordRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_record(date: &str, title: &str) -> CreateRecord {
    CreateRecord {
        date: Some(date.to_string()),
        title: title.to_string(),
        content: Some("正文".to_string()),
        status: "进行中".to_string(),
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_then_list_returns_canonical_date(pool: PgPool) {
    RecordRepo::create(&pool, &new_record("2024-01-01", "first"))
        .await
        .unwrap();

    let records = RecordRepo::list(&pool).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, ymd(2024, 1, 1));
    assert_eq!(records[0].title, "first");
    assert_eq!(records[0].status, "进行中");

    // The serialized form is the canonical YYYY-MM-DD string.
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["date"], "2024-01-01");
}

#[sqlx::test]
async fn list_orders_by_date_descending(pool: PgPool) {
    RecordRepo::create(&pool, &new_record("2024-01-01", "oldest"))
        .await
        .unwrap();
    RecordRepo::create(&pool, &new_record("2024-03-01", "newest"))
        .await
        .unwrap();
    RecordRepo::create(&pool, &new_record("2024-02-01", "middle"))
        .await
        .unwrap();

    let records = RecordRepo::list(&pool).await.unwrap();
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["newest", "middle", "oldest"]);
}

#[sqlx::test]
async fn create_rejects_malformed_date(pool: PgPool) {
    // A value the normalizer passed through unchanged; the cast fails.
    let result = RecordRepo::create(&pool, &new_record("tomorrow", "bad date")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));

    assert!(RecordRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_overwrites_all_fields(pool: PgPool) {
    RecordRepo::create(&pool, &new_record("2024-01-01", "before"))
        .await
        .unwrap();
    let id = RecordRepo::list(&pool).await.unwrap()[0].id;

    let matched = RecordRepo::update(
        &pool,
        id,
        &UpdateRecord {
            date: Some("2024-02-02".to_string()),
            title: "after".to_string(),
            content: None,
            status: "完成".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(matched);

    let records = RecordRepo::list(&pool).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, ymd(2024, 2, 2));
    assert_eq!(records[0].title, "after");
    assert_eq!(records[0].content, None);
    assert_eq!(records[0].status, "完成");
}

#[sqlx::test]
async fn update_missing_id_matches_nothing_and_creates_nothing(pool: PgPool) {
    let matched = RecordRepo::update(
        &pool,
        424242,
        &UpdateRecord {
            date: Some("2024-02-02".to_string()),
            title: "ghost".to_string(),
            content: None,
            status: "完成".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(!matched);
    assert!(RecordRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_removes_the_row(pool: PgPool) {
    RecordRepo::create(&pool, &new_record("2024-01-01", "doomed"))
        .await
        .unwrap();
    let id = RecordRepo::list(&pool).await.unwrap()[0].id;

    assert!(RecordRepo::delete(&pool, id).await.unwrap());
    assert!(RecordRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test]
async fn delete_missing_id_is_a_noop(pool: PgPool) {
    assert!(!RecordRepo::delete(&pool, 424242).await.unwrap());
}
