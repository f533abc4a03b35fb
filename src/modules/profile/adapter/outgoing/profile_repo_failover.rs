use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::profile_repo_memory::InMemoryProfileRepo;
use crate::profile::application::ports::outgoing::{
    CreateProfileData, ProfileFilter, ProfilePatch, ProfileRepository, ProfileRepositoryError,
    ProfileSource, Provenance,
};
use crate::profile::domain::entities::Profile;

/// Primary store with an in-memory fallback for reads.
///
/// Every successful primary read or write is mirrored into the fallback so
/// it stays warm. When the primary reports Unavailable, reads are served
/// from the fallback and tagged `Provenance::Fallback`; writes propagate
/// the error.
#[derive(Clone)]
pub struct FailoverProfileRepo<P>
where
    P: ProfileRepository,
{
    primary: P,
    fallback: InMemoryProfileRepo,
}

impl<P> FailoverProfileRepo<P>
where
    P: ProfileRepository,
{
    pub fn new(primary: P, fallback: InMemoryProfileRepo) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P> ProfileRepository for FailoverProfileRepo<P>
where
    P: ProfileRepository + Sync + Send,
{
    async fn find(&self, filter: ProfileFilter) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let profiles = self.primary.find(filter).await?;
        self.fallback.absorb_all(&profiles);
        Ok(profiles)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        let profile = self.primary.find_by_id(id).await?;
        if let Some(p) = &profile {
            self.fallback.absorb(p.clone());
        }
        Ok(profile)
    }

    async fn create(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError> {
        let profile = self.primary.create(data).await?;
        self.fallback.absorb(profile.clone());
        Ok(profile)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let updated = self.primary.update_by_id(id, patch).await?;
        if let Some(p) = &updated {
            self.fallback.absorb(p.clone());
        }
        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProfileRepositoryError> {
        let deleted = self.primary.delete_by_id(id).await?;
        if deleted {
            self.fallback.evict(id);
        }
        Ok(deleted)
    }

    async fn increment_share_count(&self, id: Uuid) -> Result<i32, ProfileRepositoryError> {
        let count = self.primary.increment_share_count(id).await?;
        if let Ok(Some(p)) = self.primary.find_by_id(id).await {
            self.fallback.absorb(p);
        }
        Ok(count)
    }
}

#[async_trait]
impl<P> ProfileSource for FailoverProfileRepo<P>
where
    P: ProfileRepository + Sync + Send,
{
    async fn load(
        &self,
        filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), ProfileRepositoryError> {
        match self.primary.find(filter).await {
            Ok(profiles) => {
                self.fallback.absorb_all(&profiles);
                Ok((profiles, Provenance::Primary))
            }
            Err(ProfileRepositoryError::Unavailable(msg)) => {
                warn!(error = %msg, "primary store unavailable, serving fallback");
                let profiles = self.fallback.find(filter).await?;
                Ok((profiles, Provenance::Fallback))
            }
            Err(e) => Err(e),
        }
    }

    async fn load_by_id(
        &self,
        id: Uuid,
    ) -> Result<(Option<Profile>, Provenance), ProfileRepositoryError> {
        match self.primary.find_by_id(id).await {
            Ok(profile) => {
                if let Some(p) = &profile {
                    self.fallback.absorb(p.clone());
                }
                Ok((profile, Provenance::Primary))
            }
            Err(ProfileRepositoryError::Unavailable(msg)) => {
                warn!(error = %msg, profile_id = %id, "primary store unavailable, serving fallback");
                let profile = self.fallback.find_by_id(id).await?;
                Ok((profile, Provenance::Fallback))
            }
            Err(e) => Err(e),
        }
    }
}
