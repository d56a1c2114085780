use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blog_shared::PostStatus;

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = i64;

/// Post entity - a stored blog post.
///
/// `id` is `None` until the post has been saved once; the store assigns it
/// and it never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub create_date: DateTime<Utc>,
    pub status: PostStatus,
    pub publish_date: DateTime<Utc>,
}

impl Post {
    /// Create an unsaved draft, created and published now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            create_date: now,
            status: PostStatus::Draft,
            publish_date: now,
        }
    }

    /// A post that carries nothing but its id, for referring to a stored row.
    pub fn reference(id: PostId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Sortable post attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Id,
    Title,
    Content,
    CreateDate,
    Status,
    PublishDate,
}

impl PostField {
    /// Compare two posts on this attribute only.
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
            Self::Content => a.content.cmp(&b.content),
            Self::CreateDate => a.create_date.cmp(&b.create_date),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::PublishDate => a.publish_date.cmp(&b.publish_date),
        }
    }
}

impl FromStr for PostField {
    type Err = DomainError;

    /// Accepts the wire (camelCase) and column (snake_case) spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "createDate" | "create_date" => Ok(Self::CreateDate),
            "status" => Ok(Self::Status),
            "publishDate" | "publish_date" => Ok(Self::PublishDate),
            other => Err(DomainError::Validation(format!(
                "No property '{}' found for type 'Post'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_only_sets_id() {
        let post = Post::reference(7);
        assert_eq!(post.id, Some(7));
        assert!(post.title.is_empty());
    }

    #[test]
    fn test_field_parsing_accepts_both_spellings() {
        assert_eq!("createDate".parse::<PostField>().unwrap(), PostField::CreateDate);
        assert_eq!("publish_date".parse::<PostField>().unwrap(), PostField::PublishDate);
        assert!(matches!(
            "author".parse::<PostField>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_status_ordering_is_alphabetical() {
        let mut draft = Post::new("a", "a");
        let mut archived = Post::new("b", "b");
        draft.status = PostStatus::Draft;
        archived.status = PostStatus::Archived;
        assert_eq!(PostField::Status.compare(&archived, &draft), Ordering::Less);
    }
}
