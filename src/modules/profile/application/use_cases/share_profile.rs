use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone)]
pub enum ShareProfileError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IShareProfileUseCase: Send + Sync {
    /// Returns the new share count.
    async fn execute(&self, id: Uuid) -> Result<i32, ShareProfileError>;
}

pub struct ShareProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> ShareProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IShareProfileUseCase for ShareProfileUseCase<R>
where
    R: ProfileRepository + Sync + Send,
{
    async fn execute(&self, id: Uuid) -> Result<i32, ShareProfileError> {
        self.repository
            .increment_share_count(id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => ShareProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg)
                | ProfileRepositoryError::Unavailable(msg) => {
                    ShareProfileError::RepositoryError(msg)
                }
            })
    }
}
