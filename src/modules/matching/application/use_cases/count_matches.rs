use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::matching::application::match_count_cache::TtlCache;
use crate::matching::domain::scorer::score_profiles;
use crate::profile::application::ports::outgoing::{
    ProfileFilter, ProfileRepositoryError, ProfileSource, Provenance,
};
use crate::profile::domain::entities::ProfileStatus;

/// How long a computed summary is served before a rescan.
pub const MATCH_COUNT_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub enum CountMatchesError {
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCountEntry {
    pub profile_id: Uuid,
    pub name: String,
    pub match_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchCountSummary {
    pub entries: Vec<MatchCountEntry>,
    pub provenance: Provenance,
}

#[async_trait]
pub trait ICountMatchesUseCase: Send + Sync {
    async fn execute(&self) -> Result<MatchCountSummary, CountMatchesError>;
}

/// Per-profile match counts over the whole active pool, behind a short
/// TTL cache: every uncached call is a full O(n²) rescore.
pub struct CountMatchesUseCase<S>
where
    S: ProfileSource,
{
    source: S,
    cache: Arc<TtlCache<MatchCountSummary>>,
}

impl<S> CountMatchesUseCase<S>
where
    S: ProfileSource,
{
    pub fn new(source: S, cache: Arc<TtlCache<MatchCountSummary>>) -> Self {
        Self { source, cache }
    }
}

#[async_trait]
impl<S> ICountMatchesUseCase for CountMatchesUseCase<S>
where
    S: ProfileSource + Sync + Send,
{
    async fn execute(&self) -> Result<MatchCountSummary, CountMatchesError> {
        if let Some(cached) = self.cache.get().await {
            return Ok(cached);
        }

        let filter = ProfileFilter {
            gender: None,
            status: Some(ProfileStatus::Active),
        };

        let (pool, provenance) = self.source.load(filter).await.map_err(|e| match e {
            ProfileRepositoryError::DatabaseError(msg)
            | ProfileRepositoryError::Unavailable(msg) => CountMatchesError::RepositoryError(msg),
            ProfileRepositoryError::NotFound => {
                CountMatchesError::RepositoryError("unexpected not-found".to_string())
            }
        })?;

        let entries = pool
            .iter()
            .map(|requester| {
                let match_count = pool
                    .iter()
                    .filter(|candidate| {
                        candidate.id != requester.id
                            && candidate.gender == requester.gender.opposite()
                            && score_profiles(requester, candidate).is_match
                    })
                    .count() as u32;

                MatchCountEntry {
                    profile_id: requester.id,
                    name: requester.name.clone(),
                    match_count,
                }
            })
            .collect();

        let summary = MatchCountSummary {
            entries,
            provenance,
        };
        self.cache.put(summary.clone()).await;

        Ok(summary)
    }
}
