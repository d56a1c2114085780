//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{PostgresPostRepository, database::connect};
#[cfg(feature = "postgres")]
use sea_orm::DbConn;

/// Where posts are stored.
#[derive(Clone)]
pub enum Storage {
    Memory,
    #[cfg(feature = "postgres")]
    Postgres(Arc<DbConn>),
}

impl Storage {
    pub fn label(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Whether the backing store currently answers.
    pub async fn is_reachable(&self) -> bool {
        match self {
            Storage::Memory => true,
            #[cfg(feature = "postgres")]
            Storage::Postgres(db) => match db.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Database ping failed: {}", e);
                    false
                }
            },
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub storage: Storage,
}

impl AppState {
    pub fn new(repository: Arc<dyn PostRepository>, storage: Storage) -> Self {
        Self {
            posts: Arc::new(PostService::new(repository)),
            storage,
        }
    }

    /// State backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), Storage::Memory)
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is an error; no silent
    /// fallback to memory.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> std::io::Result<Self> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Posts are kept in memory only.");
            return Ok(Self::in_memory());
        };

        Self::open_database(config).await
    }

    #[cfg(feature = "postgres")]
    async fn open_database(config: &DatabaseConfig) -> std::io::Result<Self> {
        let conn = Arc::new(connect(config).await.map_err(std::io::Error::other)?);
        let repository = Arc::new(PostgresPostRepository::new(Arc::clone(&conn)));
        tracing::info!("Application state initialized (postgres)");
        Ok(Self::new(repository, Storage::Postgres(conn)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn open_database(config: &DatabaseConfig) -> std::io::Result<Self> {
        tracing::warn!(
            url = %config.url,
            "Built without postgres feature - ignoring DATABASE_URL, using in-memory storage"
        );
        Ok(Self::in_memory())
    }
}
