//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Direction, Page, PageRequest, Post, PostField, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    rows: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// Posts kept in an ordered map; ids come from a sequence starting at 1.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        // An id with no stored row is treated like no id at all.
        let id = match post.id {
            Some(id) if store.rows.contains_key(&id) => id,
            requested => {
                if let Some(id) = requested {
                    tracing::debug!(post_id = id, "Save of unknown post stored as new");
                }
                store.last_id += 1;
                store.last_id
            }
        };

        post.id = Some(id);
        store.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.rows.remove(&id).is_none() {
            tracing::debug!(post_id = id, "Delete of unknown post ignored");
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>, RepoError> {
        let store = self.store.read().await;

        // Map iteration is by id, and the sort is stable, so ties stay in id order.
        let mut posts: Vec<&Post> = store.rows.values().collect();
        if let Some(sort) = request.sort {
            posts.sort_by(|a, b| {
                let ordering = sort.field.compare(a, b);
                match sort.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        let total = posts.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = posts
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Sort;

    async fn seeded(titles: &[&str]) -> InMemoryPostRepository {
        let repo = InMemoryPostRepository::new();
        for title in titles {
            repo.save(Post::new(*title, "body")).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = seeded(&["a", "b"]).await;
        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_whole_record() {
        let repo = seeded(&["a"]).await;
        let mut post = repo.find_by_id(1).await.unwrap().unwrap();
        post.title = "changed".to_string();
        post.content = "new body".to_string();

        repo.save(post.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(post));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts_under_new_id() {
        let repo = seeded(&["a"]).await;
        let mut post = Post::new("b", "body");
        post.id = Some(99);

        let saved = repo.save(post).await.unwrap();
        assert_eq!(saved.id, Some(2));
        assert_eq!(saved.title, "b");
        assert_eq!(repo.find_by_id(99).await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = seeded(&["a"]).await;
        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(1).await.unwrap();
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = seeded(&["a", "b"]).await;
        repo.delete_by_id(2).await.unwrap();
        let saved = repo.save(Post::new("c", "body")).await.unwrap();
        assert_eq!(saved.id, Some(3));
    }

    #[tokio::test]
    async fn test_page_bounds() {
        let repo = seeded(&["a", "b", "c", "d", "e"]).await;

        let page = repo.find_page(&PageRequest::new(1, 2)).await.unwrap();
        let titles: Vec<_> = page.content.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "d"]);
        assert_eq!(page.total_elements, 5);

        let last = repo.find_page(&PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(last.content.len(), 1);

        let beyond = repo.find_page(&PageRequest::new(9, 2)).await.unwrap();
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total_elements, 5);
    }

    #[tokio::test]
    async fn test_page_sorting() {
        let repo = seeded(&["b", "c", "a"]).await;

        let request = PageRequest::new(0, 10).with_sort(Sort::desc(PostField::Title));
        let page = repo.find_page(&request).await.unwrap();
        let titles: Vec<_> = page.content.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);

        // Equal keys fall back to id order.
        let request = PageRequest::new(0, 10).with_sort(Sort::asc(PostField::Content));
        let page = repo.find_page(&request).await.unwrap();
        let ids: Vec<_> = page.content.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }
}
