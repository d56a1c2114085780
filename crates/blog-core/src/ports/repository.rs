use async_trait::async_trait;

use crate::domain::{Page, PageRequest, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert an entity without an ID, or replace the stored entity with the same ID.
    ///
    /// Replacing an ID that is not stored fails with [`RepoError::NotFound`].
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an unknown ID succeeds.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Every stored post, by ascending ID.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// One page of posts. Without a sort, and between equal sort keys, posts are ordered by ID.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>, RepoError>;
}
