//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, Order, PaginatorTrait, QueryOrder};

use blog_core::domain::{Direction, Page, PageRequest, Post, PostField};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn column(field: PostField) -> post::Column {
    match field {
        PostField::Id => post::Column::Id,
        PostField::Title => post::Column::Title,
        PostField::Content => post::Column::Content,
        PostField::CreateDate => post::Column::CreateDate,
        PostField::Status => post::Column::Status,
        PostField::PublishDate => post::Column::PublishDate,
    }
}

fn order(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(sort) = request.sort {
            query = query.order_by(column(sort.field), order(sort.direction));
        }
        let paginator = query
            .order_by_asc(post::Column::Id)
            .paginate(self.db.as_ref(), request.size);

        let total = paginator.num_items().await.map_err(repo_error)?;
        let rows = paginator
            .fetch_page(request.page)
            .await
            .map_err(repo_error)?;

        let content = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(content, request, total))
    }
}
