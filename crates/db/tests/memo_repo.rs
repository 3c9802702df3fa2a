//! Integration tests for the memo repository.
//!
//! Exercises the storage gateway against a real SQLite database created
//! per test by `#[sqlx::test]`.

use sqlx::SqlitePool;
use memo_db::models::memo::{CreateMemo, UpdateMemo};
use memo_db::repositories::MemoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_memo(title: &str, content: Option<&str>) -> CreateMemo {
    CreateMemo {
        title: title.to_string(),
        content: content.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_on_empty_store_returns_empty_vec(pool: SqlitePool) {
    let memos = MemoRepo::list(&pool).await.unwrap();
    assert!(memos.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_id_and_timestamps(pool: SqlitePool) {
    let memo = MemoRepo::create(&pool, &new_memo("buy milk", None))
        .await
        .unwrap();

    assert!(memo.id > 0);
    assert_eq!(memo.title, "buy milk");
    assert_eq!(memo.content, None);
    assert_eq!(memo.created_at, memo.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_memos_in_id_order(pool: SqlitePool) {
    let first = MemoRepo::create(&pool, &new_memo("first", Some("a")))
        .await
        .unwrap();
    let second = MemoRepo::create(&pool, &new_memo("second", None))
        .await
        .unwrap();

    let memos = MemoRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = memos.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(memos[0].content.as_deref(), Some("a"));
}

// ---------------------------------------------------------------------------
// Find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_missing_row(pool: SqlitePool) {
    let found = MemoRepo::find_by_id(&pool, 999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_created_row(pool: SqlitePool) {
    let created = MemoRepo::create(&pool, &new_memo("lookup", Some("body")))
        .await
        .unwrap();

    let found = MemoRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("memo should exist");
    assert_eq!(found.title, "lookup");
    assert_eq!(found.content.as_deref(), Some("body"));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_title_leaves_content_untouched(pool: SqlitePool) {
    let created = MemoRepo::create(&pool, &new_memo("old", Some("keep me")))
        .await
        .unwrap();

    let patch = UpdateMemo {
        title: Some("new".to_string()),
        content: None,
    };
    let updated = MemoRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("memo should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "new");
    assert_eq!(updated.content.as_deref(), Some("keep me"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_content_leaves_title_untouched(pool: SqlitePool) {
    let created = MemoRepo::create(&pool, &new_memo("buy milk", None))
        .await
        .unwrap();

    let patch = UpdateMemo {
        title: None,
        content: Some("2%".to_string()),
    };
    let updated = MemoRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "buy milk");
    assert_eq!(updated.content.as_deref(), Some("2%"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_row_returns_none(pool: SqlitePool) {
    let patch = UpdateMemo {
        title: Some("ghost".to_string()),
        content: None,
    };
    let result = MemoRepo::update(&pool, 42, &patch).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row_once(pool: SqlitePool) {
    let created = MemoRepo::create(&pool, &new_memo("temp", None))
        .await
        .unwrap();

    assert!(MemoRepo::delete(&pool, created.id).await.unwrap());
    assert!(MemoRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());

    // Hard delete: a second attempt affects no rows.
    assert!(!MemoRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ids_are_not_reused_after_delete(pool: SqlitePool) {
    let first = MemoRepo::create(&pool, &new_memo("one", None)).await.unwrap();
    MemoRepo::delete(&pool, first.id).await.unwrap();

    let second = MemoRepo::create(&pool, &new_memo("two", None)).await.unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Pool helpers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_succeeds_on_live_pool(pool: SqlitePool) {
    memo_db::health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn create_pool_runs_migrations_on_fresh_memory_db() {
    let pool = memo_db::create_pool("sqlite::memory:").await.unwrap();
    memo_db::run_migrations(&pool).await.unwrap();

    let memos = MemoRepo::list(&pool).await.unwrap();
    assert!(memos.is_empty());
}
