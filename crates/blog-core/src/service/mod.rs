//! Application services - orchestrate ports and mappers.

mod post;

pub use post::PostService;
