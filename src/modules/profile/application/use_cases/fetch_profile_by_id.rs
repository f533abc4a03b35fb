use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{
    ProfileRepositoryError, ProfileSource, Provenance,
};
use crate::profile::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileByIdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(Profile, Provenance), FetchProfileError>;
}

pub struct FetchProfileByIdUseCase<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> FetchProfileByIdUseCase<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> IFetchProfileByIdUseCase for FetchProfileByIdUseCase<S>
where
    S: ProfileSource + Sync + Send,
{
    async fn execute(&self, id: Uuid) -> Result<(Profile, Provenance), FetchProfileError> {
        let (profile, provenance) = self.source.load_by_id(id).await.map_err(|e| match e {
            ProfileRepositoryError::NotFound => FetchProfileError::NotFound,
            ProfileRepositoryError::DatabaseError(msg)
            | ProfileRepositoryError::Unavailable(msg) => FetchProfileError::RepositoryError(msg),
        })?;

        match profile {
            Some(p) => Ok((p, provenance)),
            None => Err(FetchProfileError::NotFound),
        }
    }
}
