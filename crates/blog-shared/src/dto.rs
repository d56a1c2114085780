//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

/// Post as exposed at the API boundary.
///
/// Only `title` and `content` are required on the wire. `id` must be absent on
/// create and present on update; the handlers enforce that, not this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Option<i64>,

    #[validate(
        required(message = "must not be null"),
        length(min = 1, message = "must not be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "must not be null"),
        length(min = 1, message = "must not be empty")
    )]
    pub content: Option<String>,

    pub create_date: Option<DateTime<Utc>>,

    pub status: Option<PostStatus>,

    pub publish_date: Option<DateTime<Utc>>,
}

impl PostDto {
    /// A DTO carrying only the two required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
