//! Conversions between stored entities and their transfer objects.

use chrono::Utc;

use blog_shared::PostDto;

use crate::domain::{Post, PostId};

/// Bidirectional entity/DTO conversion.
///
/// `D` is the boundary type, `E` the storage type.
pub trait EntityMapper<D, E> {
    fn to_entity(&self, dto: D) -> E;

    fn to_dto(&self, entity: E) -> D;

    fn to_entity_opt(&self, dto: Option<D>) -> Option<E> {
        dto.map(|d| self.to_entity(d))
    }

    fn to_dto_opt(&self, entity: Option<E>) -> Option<D> {
        entity.map(|e| self.to_dto(e))
    }

    fn to_entities(&self, dtos: Vec<D>) -> Vec<E> {
        dtos.into_iter().map(|d| self.to_entity(d)).collect()
    }

    fn to_dtos(&self, entities: Vec<E>) -> Vec<D> {
        entities.into_iter().map(|e| self.to_dto(e)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostMapper;

impl PostMapper {
    /// Rebuild a post from its id alone.
    pub fn from_id(&self, id: Option<PostId>) -> Option<Post> {
        id.map(Post::reference)
    }
}

impl EntityMapper<PostDto, Post> for PostMapper {
    /// Field for field. Dates left out of the DTO default to now (publish
    /// date to the create date) and a missing status defaults to draft.
    fn to_entity(&self, dto: PostDto) -> Post {
        let create_date = dto.create_date.unwrap_or_else(Utc::now);
        Post {
            id: dto.id,
            title: dto.title.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            create_date,
            status: dto.status.unwrap_or_default(),
            publish_date: dto.publish_date.unwrap_or(create_date),
        }
    }

    fn to_dto(&self, post: Post) -> PostDto {
        PostDto {
            id: post.id,
            title: Some(post.title),
            content: Some(post.content),
            create_date: Some(post.create_date),
            status: Some(post.status),
            publish_date: Some(post.publish_date),
        }
    }
}
