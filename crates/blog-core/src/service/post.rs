use std::sync::Arc;

use blog_shared::PostDto;

use crate::domain::{Page, PageRequest, PostId};
use crate::error::DomainError;
use crate::mapper::{EntityMapper, PostMapper};
use crate::ports::{BaseRepository, PostRepository};

/// Post use cases. Each call maps the DTO, performs exactly one repository
/// operation and maps the result back.
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    mapper: PostMapper,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self {
            repository,
            mapper: PostMapper,
        }
    }

    /// Insert or replace a post.
    pub async fn save(&self, dto: PostDto) -> Result<PostDto, DomainError> {
        tracing::debug!(post = ?dto, "Request to save Post");

        let post = self.mapper.to_entity(dto);
        let saved = self.repository.save(post).await?;
        Ok(self.mapper.to_dto(saved))
    }

    pub async fn find_all(&self) -> Result<Vec<PostDto>, DomainError> {
        tracing::debug!("Request to get all Posts");

        let posts = self.repository.find_all().await?;
        Ok(self.mapper.to_dtos(posts))
    }

    pub async fn find_all_by_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<PostDto>, DomainError> {
        tracing::debug!(?request, "Request to get all Posts by page");

        let page = self.repository.find_page(&request).await?;
        Ok(page.map(|post| self.mapper.to_dto(post)))
    }

    pub async fn find_one(&self, id: PostId) -> Result<Option<PostDto>, DomainError> {
        tracing::debug!(post_id = id, "Request to get Post");

        let post = self.repository.find_by_id(id).await?;
        Ok(self.mapper.to_dto_opt(post))
    }

    /// Delete a post. Says nothing about whether it existed.
    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        tracing::debug!(post_id = id, "Request to delete Post");

        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}
