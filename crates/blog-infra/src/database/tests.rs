use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use blog_core::domain::{PageRequest, Post, PostField, PostStatus, Sort};
use blog_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i64, title: &str) -> post::Model {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        create_date: created.into(),
        status: post::Status::Published,
        publish_date: created.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, Some(1));
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.status, PostStatus::Published);
}

#[tokio::test]
async fn test_find_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    let result: Option<Post> = repo.find_by_id(404).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_save_new_post_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(7, "Fresh")]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    let saved: Post = repo.save(Post::new("Fresh", "Content")).await.unwrap();
    assert_eq!(saved.id, Some(7));
    assert_eq!(saved.title, "Fresh");
}

#[tokio::test]
async fn test_update_of_unknown_post_inserts_new_row() {
    // UPDATE ... RETURNING finds nothing, then the INSERT returns the new row.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new(), vec![model(8, "Ghost")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(Arc::clone(&db));

    let mut post = Post::new("Ghost", "Content");
    post.id = Some(99);
    let saved: Post = repo.save(post).await.unwrap();
    assert_eq!(saved.id, Some(8));
    assert_eq!(saved.title, "Ghost");

    drop(repo);
    let db = Arc::into_inner(db).unwrap();
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 2);
    let insert = &log[1].statements()[0].sql;
    assert!(insert.starts_with(r#"INSERT INTO "posts""#));
    let columns = insert.split("VALUES").next().unwrap_or_default();
    assert!(!columns.contains(r#""id""#), "unexpected insert: {}", insert);
}

#[tokio::test]
async fn test_delete_unknown_post_succeeds() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    BaseRepository::<Post, i64>::delete_by_id(&repo, 5).await.unwrap();
}

#[tokio::test]
async fn test_find_page_reports_total() {
    let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(3)))]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row]])
        .append_query_results([vec![model(3, "Third")]])
        .into_connection();

    let repo = PostgresPostRepository::new(Arc::new(db));

    let page = repo.find_page(&PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].id, Some(3));
}

#[tokio::test]
async fn test_find_page_orders_by_sort_then_id() {
    let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(2)))]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row]])
        .append_query_results([vec![model(2, "B"), model(1, "A")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(Arc::clone(&db));

    let request = PageRequest::new(0, 10).with_sort(Sort::desc(PostField::Title));
    let page = repo.find_page(&request).await.unwrap();
    assert_eq!(page.content.len(), 2);

    drop(repo);
    let db = Arc::into_inner(db).unwrap();
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 2);
    let select = &log[1].statements()[0].sql;
    assert!(
        select.contains(r#"ORDER BY "posts"."title" DESC, "posts"."id" ASC"#),
        "unexpected query: {}",
        select
    );
}
