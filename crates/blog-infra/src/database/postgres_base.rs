use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait, SqlErr, TryIntoModel,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Classify a SeaORM error for the domain.
pub(crate) fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => RepoError::Constraint(msg),
            _ => RepoError::Query(err.to_string()),
        },
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + TryIntoModel<E::Model> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + std::fmt::Debug + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(self.db.as_ref()).await.map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        // Insert when the key is unset, UPDATE ... RETURNING otherwise.
        let active_model: E::ActiveModel = entity.into();
        let model = match active_model.clone().save(self.db.as_ref()).await {
            Ok(saved) => saved
                .try_into_model()
                .map_err(|e| RepoError::Query(e.to_string()))?,
            // No row under that key: store it as a new row with a generated key.
            Err(DbErr::RecordNotUpdated) => {
                let mut fresh = active_model;
                for key in E::PrimaryKey::iter() {
                    fresh.not_set(key.into_column());
                }
                tracing::debug!("Save of unknown row stored as new");
                fresh.insert(self.db.as_ref()).await.map_err(repo_error)?
            }
            Err(e) => return Err(repo_error(e)),
        };
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(id = ?id, "Delete of unknown row ignored");
        }

        Ok(())
    }
}
