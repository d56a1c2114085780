use std::sync::Arc;

use chrono::{TimeZone, Utc};

use blog_core::domain::{PageRequest, PostField, Sort};
use blog_core::PostService;
use blog_infra::InMemoryPostRepository;
use blog_shared::{PostDto, PostStatus};

fn service() -> PostService {
    PostService::new(Arc::new(InMemoryPostRepository::new()))
}

fn full_dto(title: &str) -> PostDto {
    PostDto {
        create_date: Some(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()),
        status: Some(PostStatus::Published),
        publish_date: Some(Utc.with_ymd_and_hms(2024, 1, 11, 9, 0, 0).unwrap()),
        ..PostDto::new(title, "content")
    }
}

#[tokio::test]
async fn create_then_find_returns_same_record() {
    let service = service();

    let dto = full_dto("first");
    let created = service.save(dto.clone()).await.unwrap();
    assert_eq!(created.id, Some(1));

    let found = service.find_one(1).await.unwrap().unwrap();
    assert_eq!(found, PostDto { id: Some(1), ..dto });
}

#[tokio::test]
async fn create_fills_server_side_defaults() {
    let service = service();

    let created = service
        .save(PostDto {
            status: Some(PostStatus::Draft),
            ..PostDto::new("A", "B")
        })
        .await
        .unwrap();

    assert_eq!(created.status, Some(PostStatus::Draft));
    assert!(created.create_date.is_some());
    assert_eq!(created.publish_date, created.create_date);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let service = service();
    let created = service.save(full_dto("before")).await.unwrap();

    let replacement = PostDto {
        id: created.id,
        status: Some(PostStatus::Archived),
        ..full_dto("after")
    };
    let updated = service.save(replacement.clone()).await.unwrap();
    assert_eq!(updated, replacement);

    let all = service.find_all().await.unwrap();
    assert_eq!(all, vec![replacement]);
}

#[tokio::test]
async fn update_of_unknown_id_persists_as_new_post() {
    let service = service();

    let stored = service
        .save(PostDto {
            id: Some(12),
            ..full_dto("ghost")
        })
        .await
        .unwrap();
    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.title.as_deref(), Some("ghost"));
    assert_eq!(service.find_one(1).await.unwrap(), Some(stored));
    assert_eq!(service.find_one(12).await.unwrap(), None);
}

#[tokio::test]
async fn find_one_of_unknown_id_is_none() {
    assert_eq!(service().find_one(1).await.unwrap(), None);
}

#[tokio::test]
async fn delete_twice_succeeds() {
    let service = service();
    service.save(full_dto("doomed")).await.unwrap();

    service.delete(1).await.unwrap();
    service.delete(1).await.unwrap();
    assert_eq!(service.find_one(1).await.unwrap(), None);
}

#[tokio::test]
async fn pages_hold_at_most_size_items() {
    let service = service();
    for n in 0..7 {
        service.save(full_dto(&format!("post {}", n))).await.unwrap();
    }

    for k in 0..3 {
        let page = service
            .find_all_by_page(PageRequest::new(k, 2))
            .await
            .unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 7);
    }

    let tail = service
        .find_all_by_page(PageRequest::new(3, 2))
        .await
        .unwrap();
    assert_eq!(tail.content.len(), 1);
    assert_eq!(tail.total_pages(), 4);
}

#[tokio::test]
async fn pages_follow_requested_sort() {
    let service = service();
    for title in ["b", "a", "c"] {
        service.save(full_dto(title)).await.unwrap();
    }

    let request = PageRequest::new(0, 2).with_sort(Sort::asc(PostField::Title));
    let page = service.find_all_by_page(request).await.unwrap();
    let titles: Vec<_> = page
        .content
        .iter()
        .filter_map(|dto| dto.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["a", "b"]);
}
