use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};

use quire_core::domain::{NewPost, PostId};
use quire_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i64, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        body: format!("{title} body"),
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, id as u32)
            .unwrap()
            .into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(7, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_id(PostId(7)).await.unwrap().unwrap();

    assert_eq!(post.id, PostId(7));
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.body, "Test Post body");
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.find_by_id(PostId(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_id_beyond_bigint_skips_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_id(PostId(u64::MAX)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_returns_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(42, "Fresh")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = repo
        .insert(NewPost::new("Fresh", "Fresh body"))
        .await
        .unwrap();

    assert_eq!(id, PostId(42));
}

#[tokio::test]
async fn test_range_fetch_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(3, "Third"), model(2, "Second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.range_fetch(5, 5).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PostId(3));
    assert_eq!(posts[1].title, "Second");
}

#[tokio::test]
async fn test_count_reports_rows_in_window() {
    let id_row = |id: i64| BTreeMap::from([("id", Value::from(id))]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![id_row(4), id_row(3)]])
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert_eq!(repo.count(5, 5).await.unwrap(), 2);
    assert_eq!(repo.count(10, 5).await.unwrap(), 0);
}

#[tokio::test]
async fn test_offset_beyond_bigint_is_empty_window() {
    // No results are queued: reaching the database would fail the call.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    assert!(repo.range_fetch(u64::MAX, 5).await.unwrap().is_empty());
    assert_eq!(repo.count(u64::MAX, 5).await.unwrap(), 0);
    assert!(repo.range_fetch(i64::MAX as u64 + 1, 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_leaves_timestamp_to_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(9, "Clocked")]])
        .into_connection();

    // `DatabaseConnection` is not `Clone` under sea-orm's `mock` feature; share the Arc.
    let shared = match &db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone())
        }
        _ => unreachable!("mock database"),
    };
    let repo = PostgresPostRepository::new(shared);
    repo.insert(NewPost::new("Clocked", "Clocked body"))
        .await
        .unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#"INSERT INTO \"posts\" (\"title\", \"body\") VALUES"#));
}
