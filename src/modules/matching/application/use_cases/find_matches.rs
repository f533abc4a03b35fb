use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::matching::domain::direct::{direct_similarity, DirectSimilarity};
use crate::matching::domain::legacy::legacy_primary_match;
use crate::matching::domain::scorer::{score_profiles, MatchReport};
use crate::profile::application::ports::outgoing::{
    ProfileFilter, ProfileRepositoryError, ProfileSource, Provenance,
};
use crate::profile::domain::entities::{Profile, ProfileStatus};

#[derive(Debug, Clone)]
pub enum FindMatchesError {
    ProfileNotFound,
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub profile: Profile,
    pub report: MatchReport,
    /// Symmetric field overlap, reported alongside the requirements-based
    /// accept decision.
    pub similarity: DirectSimilarity,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResults {
    pub matches: Vec<MatchCandidate>,
    pub provenance: Provenance,
}

#[async_trait]
pub trait IFindMatchesUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid) -> Result<MatchResults, FindMatchesError>;
}

/// Full scan of the candidate pool for one requester. No pagination; the
/// pool is hundreds of records, not millions.
pub struct FindMatchesUseCase<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> FindMatchesUseCase<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

fn map_repo_err(e: ProfileRepositoryError) -> FindMatchesError {
    match e {
        ProfileRepositoryError::NotFound => FindMatchesError::ProfileNotFound,
        ProfileRepositoryError::DatabaseError(msg) | ProfileRepositoryError::Unavailable(msg) => {
            FindMatchesError::RepositoryError(msg)
        }
    }
}

/// The accept gate for one candidate. Reads served by the fallback store
/// use the looser legacy rule; the report itself always comes from the
/// primary scorer so callers see the same matched-criteria shape.
fn accepts(requester: &Profile, candidate: &Profile, provenance: Provenance) -> bool {
    match provenance {
        Provenance::Primary => score_profiles(requester, candidate).is_match,
        Provenance::Fallback => legacy_primary_match(requester, candidate),
    }
}

#[async_trait]
impl<S> IFindMatchesUseCase for FindMatchesUseCase<S>
where
    S: ProfileSource + Sync + Send,
{
    async fn execute(&self, profile_id: Uuid) -> Result<MatchResults, FindMatchesError> {
        let (maybe_requester, _) = self
            .source
            .load_by_id(profile_id)
            .await
            .map_err(map_repo_err)?;
        let requester = maybe_requester.ok_or(FindMatchesError::ProfileNotFound)?;

        let filter = ProfileFilter {
            gender: Some(requester.gender.opposite()),
            status: Some(ProfileStatus::Active),
        };

        let (pool, provenance) = self.source.load(filter).await.map_err(map_repo_err)?;

        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.id != requester.id)
            .filter(|candidate| accepts(&requester, candidate, provenance))
            .map(|candidate| {
                let report = score_profiles(&requester, &candidate);
                let similarity = direct_similarity(&requester, &candidate);
                MatchCandidate {
                    profile: candidate,
                    report,
                    similarity,
                }
            })
            .collect();

        Ok(MatchResults {
            matches,
            provenance,
        })
    }
}
