//! # Blog Core
//!
//! The domain layer of the blog service: the `Post` entity, the repository
//! port, the entity/DTO mapper and the service that ties them together.
//! Storage adapters live in `blog-infra`.

pub mod domain;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use mapper::{EntityMapper, PostMapper};
pub use service::PostService;
