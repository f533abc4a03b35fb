use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{
    CreateProfileData, ProfileFilter, ProfilePatch, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::{Profile, ProfileStatus};

/// Process-local store used as the degraded fallback when Postgres is
/// unreachable. The failover wrapper keeps it warm by mirroring primary
/// reads and writes into it.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepo {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror a profile read or written through the primary store.
    pub fn absorb(&self, profile: Profile) {
        self.profiles.write().unwrap().insert(profile.id, profile);
    }

    pub fn absorb_all(&self, profiles: &[Profile]) {
        let mut map = self.profiles.write().unwrap();
        for profile in profiles {
            map.insert(profile.id, profile.clone());
        }
    }

    pub fn evict(&self, id: Uuid) {
        self.profiles.write().unwrap().remove(&id);
    }

    pub fn len(&self) -> usize {
        self.profiles.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().unwrap().is_empty()
    }
}

fn matches_filter(profile: &Profile, filter: &ProfileFilter) -> bool {
    filter.gender.map_or(true, |g| profile.gender == g)
        && filter.status.map_or(true, |s| profile.status == s)
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find(&self, filter: ProfileFilter) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let map = self.profiles.read().unwrap();
        let mut found: Vec<Profile> = map
            .values()
            .filter(|p| matches_filter(p, &filter))
            .cloned()
            .collect();
        found.sort_by_key(|p| p.created_at);
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.profiles.read().unwrap().get(&id).cloned())
    }

    async fn create(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError> {
        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            name: data.name,
            father_name: data.father_name,
            gender: data.gender,
            age: data.age,
            height: data.height,
            weight: data.weight,
            complexion: data.complexion,
            cast: data.cast,
            sect: data.sect,
            marital_status: data.marital_status,
            mother_tongue: data.mother_tongue,
            origin: data.origin,
            education: data.education,
            occupation: data.occupation,
            income: data.income,
            address: data.address,
            city: data.city,
            country: data.country,
            brothers: data.brothers,
            married_brothers: data.married_brothers,
            sisters: data.sisters,
            married_sisters: data.married_sisters,
            family_details: data.family_details,
            house_type: data.house_type,
            photo: data.photo,
            status: ProfileStatus::Active,
            match_link: None,
            share_count: 0,
            requirements: data.requirements,
            created_at: now,
            updated_at: now,
        };
        self.profiles
            .write()
            .unwrap()
            .insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut map = self.profiles.write().unwrap();
        let Some(profile) = map.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(age) = patch.age {
            profile.age = age;
        }
        if let Some(height) = patch.height {
            profile.height = height;
        }
        if let Some(education) = patch.education {
            profile.education = education;
        }
        if let Some(occupation) = patch.occupation {
            profile.occupation = occupation;
        }
        if let Some(address) = patch.address {
            profile.address = address;
        }
        if let Some(city) = patch.city {
            profile.city = city;
        }
        if let Some(country) = patch.country {
            profile.country = country;
        }
        if let Some(family_details) = patch.family_details {
            profile.family_details = family_details;
        }
        if let Some(status) = patch.status {
            profile.set_status(status);
        }
        if let Some(matched_with) = patch.matched_with {
            match matched_with {
                Some(partner) => profile.link_match(partner),
                None => profile.match_link = None,
            }
        }
        if let Some(requirements) = patch.requirements {
            profile.requirements = requirements;
        }
        profile.updated_at = Utc::now();

        Ok(Some(profile.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProfileRepositoryError> {
        Ok(self.profiles.write().unwrap().remove(&id).is_some())
    }

    async fn increment_share_count(&self, id: Uuid) -> Result<i32, ProfileRepositoryError> {
        let mut map = self.profiles.write().unwrap();
        let profile = map.get_mut(&id).ok_or(ProfileRepositoryError::NotFound)?;
        profile.share_count += 1;
        profile.updated_at = Utc::now();
        Ok(profile.share_count)
    }
}
