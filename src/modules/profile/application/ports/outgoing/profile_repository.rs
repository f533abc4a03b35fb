use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::domain::entities::{
    Gender, PhotoRef, Profile, ProfileStatus, Requirements,
};

#[derive(Debug, Clone)]
pub enum ProfileRepositoryError {
    NotFound,
    /// The backend cannot be reached at all. Drives failover to the
    /// in-memory store; distinct from a query that merely failed.
    Unavailable(String),
    DatabaseError(String),
}

/// Which backend actually served a read. Reported to callers so a
/// degraded answer is distinguishable from a primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFilter {
    pub gender: Option<Gender>,
    pub status: Option<ProfileStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileData {
    pub name: String,
    pub father_name: String,
    pub gender: Gender,
    pub age: i32,
    pub height: String,
    pub weight: String,
    pub complexion: String,
    pub cast: String,
    pub sect: String,
    pub marital_status: String,
    pub mother_tongue: String,
    pub origin: String,
    pub education: String,
    pub occupation: String,
    pub income: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub brothers: i32,
    pub married_brothers: i32,
    pub sisters: i32,
    pub married_sisters: i32,
    pub family_details: String,
    pub house_type: String,
    pub photo: Option<PhotoRef>,
    pub requirements: Requirements,
}

/// Partial update applied by the admin. Absent fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub family_details: Option<String>,
    pub status: Option<ProfileStatus>,
    pub matched_with: Option<Option<Uuid>>,
    pub requirements: Option<Requirements>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, filter: ProfileFilter) -> Result<Vec<Profile>, ProfileRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn create(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError>;

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProfileRepositoryError>;

    async fn increment_share_count(&self, id: Uuid) -> Result<i32, ProfileRepositoryError>;
}

/// Provenance-aware reads. The failover wrapper reports Fallback when the
/// primary store was unreachable for that call; plain backends always
/// report their own identity.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn load(
        &self,
        filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), ProfileRepositoryError>;

    async fn load_by_id(
        &self,
        id: Uuid,
    ) -> Result<(Option<Profile>, Provenance), ProfileRepositoryError>;
}
