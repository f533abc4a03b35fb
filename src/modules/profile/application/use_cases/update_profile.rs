use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{
    ProfilePatch, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::{validate_age, Profile, ProfileValidationError};

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NotFound,
    Validation(ProfileValidationError),
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, patch: ProfilePatch) -> Result<Profile, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Normalize the status/match-link interplay before it reaches the store:
/// linking a partner forces Matched, and a status that cannot carry a
/// link clears it.
fn normalize(mut patch: ProfilePatch) -> Result<ProfilePatch, UpdateProfileError> {
    if let Some(age) = patch.age {
        validate_age(age).map_err(UpdateProfileError::Validation)?;
    }

    if let Some(Some(_)) = patch.matched_with {
        patch.status = Some(crate::profile::domain::entities::ProfileStatus::Matched);
    } else if let Some(status) = patch.status {
        if !status.allows_match_link() {
            patch.matched_with = Some(None);
        }
    }

    Ok(patch)
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository + Sync + Send,
{
    async fn execute(&self, id: Uuid, patch: ProfilePatch) -> Result<Profile, UpdateProfileError> {
        let patch = normalize(patch)?;

        let updated = self
            .repository
            .update_by_id(id, patch)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg)
                | ProfileRepositoryError::Unavailable(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })?;

        updated.ok_or(UpdateProfileError::NotFound)
    }
}
