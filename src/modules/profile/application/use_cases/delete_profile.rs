use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{
    PhotoHost, ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteProfileError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteProfileUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProfileError>;
}

pub struct DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
    photo_host: Arc<dyn PhotoHost>,
}

impl<R> DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, photo_host: Arc<dyn PhotoHost>) -> Self {
        Self {
            repository,
            photo_host,
        }
    }
}

#[async_trait]
impl<R> IDeleteProfileUseCase for DeleteProfileUseCase<R>
where
    R: ProfileRepository + Sync + Send,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProfileError> {
        let profile = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg)
                | ProfileRepositoryError::Unavailable(msg) => {
                    DeleteProfileError::RepositoryError(msg)
                }
            })?
            .ok_or(DeleteProfileError::NotFound)?;

        // Fire-and-forget: one delete attempt against the photo host, the
        // record is removed either way.
        if let Some(photo) = &profile.photo {
            if let Err(e) = self.photo_host.delete(&photo.object_key).await {
                warn!(profile_id = %id, object_key = %photo.object_key, error = ?e,
                    "photo host delete failed, removing record anyway");
            }
        }

        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg)
                | ProfileRepositoryError::Unavailable(msg) => {
                    DeleteProfileError::RepositoryError(msg)
                }
            })?;

        if !deleted {
            return Err(DeleteProfileError::NotFound);
        }

        Ok(())
    }
}
