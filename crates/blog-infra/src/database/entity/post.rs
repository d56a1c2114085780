//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use blog_core::domain::{Post, PostStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub create_date: DateTimeWithTimeZone,
    pub status: Status,
    pub publish_date: DateTimeWithTimeZone,
}

/// `status` column, stored as its upper-case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "ARCHIVED")]
    Archived,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => Self::Draft,
            Status::Published => Self::Published,
            Status::Archived => Self::Archived,
        }
    }
}

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => Self::Draft,
            PostStatus::Published => Self::Published,
            PostStatus::Archived => Self::Archived,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            content: model.content,
            create_date: model.create_date.into(),
            status: model.status.into(),
            publish_date: model.publish_date.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// A post without an id leaves the key unset so the database assigns one.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map_or(NotSet, Set),
            title: Set(post.title),
            content: Set(post.content),
            create_date: Set(post.create_date.into()),
            status: Set(post.status.into()),
            publish_date: Set(post.publish_date.into()),
        }
    }
}
