use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{
    ProfileFilter, ProfileRepositoryError, ProfileSource, Provenance,
};
use crate::profile::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum FetchProfilesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfilesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), FetchProfilesError>;
}

pub struct FetchProfilesUseCase<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> FetchProfilesUseCase<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> IFetchProfilesUseCase for FetchProfilesUseCase<S>
where
    S: ProfileSource + Sync + Send,
{
    async fn execute(
        &self,
        filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), FetchProfilesError> {
        self.source.load(filter).await.map_err(|e| match e {
            ProfileRepositoryError::DatabaseError(msg)
            | ProfileRepositoryError::Unavailable(msg) => FetchProfilesError::RepositoryError(msg),
            ProfileRepositoryError::NotFound => {
                FetchProfilesError::RepositoryError("unexpected not-found".to_string())
            }
        })
    }
}
