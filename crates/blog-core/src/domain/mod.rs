//! Domain entities - the core business objects.

mod page;
mod post;

pub use blog_shared::PostStatus;
pub use page::{Direction, Page, PageRequest, Sort};
pub use post::{Post, PostField, PostId};
