//! # Blog Shared
//!
//! Wire types shared by the API server and its clients.
//! Nothing in here knows about storage; these are the shapes that cross HTTP.

pub mod dto;
pub mod page;
pub mod response;

pub use dto::{PostDto, PostStatus};
pub use page::{PageQuery, PageResponse};
pub use response::{ErrorResponse, FieldViolation};
