use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AccountRepositoryError, AdminAccountRepository, ClientAccountRepository, HashError,
    PasswordHasher,
};
use crate::auth::domain::entities::{AdminAccount, ClientAccount};
use crate::profile::application::ports::outgoing::{
    CreateProfileData, PhotoHost, PhotoHostError, ProfileFilter, ProfilePatch, ProfileRepository,
    ProfileRepositoryError, ProfileSource, Provenance,
};
use crate::profile::domain::entities::{PhotoRef, Profile, ProfileStatus};

// ============================================================================
// Profile repository stub
// ============================================================================

/// In-memory ProfileRepository for use-case tests. Not the production
/// fallback store; this one can be told to fail.
pub struct StubProfileRepository {
    profiles: Mutex<Vec<Profile>>,
    fail_with: Option<String>,
}

impl Default for StubProfileRepository {
    fn default() -> Self {
        Self::empty()
    }
}

impl StubProfileRepository {
    pub fn empty() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    fn check_failure(&self) -> Result<(), ProfileRepositoryError> {
        match &self.fail_with {
            Some(msg) => Err(ProfileRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

fn profile_from_data(data: CreateProfileData) -> Profile {
    let now = Utc::now();
    Profile {
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
    }
}

fn apply_patch(profile: &mut Profile, patch: ProfilePatch) {
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
        profile.status = status;
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
}

#[async_trait]
impl ProfileRepository for StubProfileRepository {
    async fn find(&self, filter: ProfileFilter) -> Result<Vec<Profile>, ProfileRepositoryError> {
        self.check_failure()?;
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles
            .iter()
            .filter(|p| filter.gender.map_or(true, |g| p.gender == g))
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        self.check_failure()?;
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError> {
        self.check_failure()?;
        let profile = profile_from_data(data);
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        self.check_failure()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == id) {
            Some(profile) => {
                apply_patch(profile, patch);
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProfileRepositoryError> {
        self.check_failure()?;
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }

    async fn increment_share_count(&self, id: Uuid) -> Result<i32, ProfileRepositoryError> {
        self.check_failure()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == id) {
            Some(profile) => {
                profile.share_count += 1;
                Ok(profile.share_count)
            }
            None => Err(ProfileRepositoryError::NotFound),
        }
    }
}

// ============================================================================
// Profile source stub
// ============================================================================

/// Provenance-tagged read stub. Counts load calls so cache tests can
/// assert how often the store was actually hit.
pub struct StubProfileSource {
    profiles: Vec<Profile>,
    provenance: Provenance,
    fail_with: Option<String>,
    load_calls: AtomicUsize,
}

impl StubProfileSource {
    pub fn with_profiles(profiles: Vec<Profile>, provenance: Provenance) -> Self {
        Self {
            profiles,
            provenance,
            fail_with: None,
            load_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            profiles: Vec::new(),
            provenance: Provenance::Primary,
            fail_with: Some(message.to_string()),
            load_calls: AtomicUsize::new(0),
        }
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for StubProfileSource {
    async fn load(
        &self,
        filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), ProfileRepositoryError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.fail_with {
            return Err(ProfileRepositoryError::DatabaseError(msg.clone()));
        }
        let matched = self
            .profiles
            .iter()
            .filter(|p| filter.gender.map_or(true, |g| p.gender == g))
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        Ok((matched, self.provenance))
    }

    async fn load_by_id(
        &self,
        id: Uuid,
    ) -> Result<(Option<Profile>, Provenance), ProfileRepositoryError> {
        if let Some(msg) = &self.fail_with {
            return Err(ProfileRepositoryError::DatabaseError(msg.clone()));
        }
        let found = self.profiles.iter().find(|p| p.id == id).cloned();
        Ok((found, self.provenance))
    }
}

// ============================================================================
// Photo host stub
// ============================================================================

/// Records every upload/delete so tests can assert exactly-once behavior.
pub struct RecordingPhotoHost {
    upload_result: Mutex<Result<PhotoRef, PhotoHostError>>,
    delete_fail: Mutex<Option<String>>,
    upload_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    last_deleted_key: Mutex<Option<String>>,
}

impl Default for RecordingPhotoHost {
    fn default() -> Self {
        Self {
            upload_result: Mutex::new(Ok(PhotoRef {
                url: "https://photos.example/default.jpg".to_string(),
                object_key: "default".to_string(),
            })),
            delete_fail: Mutex::new(None),
            upload_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            last_deleted_key: Mutex::new(None),
        }
    }
}

impl RecordingPhotoHost {
    pub fn set_upload_result(&self, result: Result<PhotoRef, PhotoHostError>) {
        *self.upload_result.lock().unwrap() = result;
    }

    pub fn fail_deletes(&self, message: &str) {
        *self.delete_fail.lock().unwrap() = Some(message.to_string());
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn last_deleted_key(&self) -> Option<String> {
        self.last_deleted_key.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoHost for RecordingPhotoHost {
    async fn upload(&self, _data_uri: &str) -> Result<PhotoRef, PhotoHostError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.upload_result.lock().unwrap().clone()
    }

    async fn delete(&self, object_key: &str) -> Result<bool, PhotoHostError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_deleted_key.lock().unwrap() = Some(object_key.to_string());
        match self.delete_fail.lock().unwrap().as_ref() {
            Some(msg) => Err(PhotoHostError::Infrastructure(msg.clone())),
            None => Ok(true),
        }
    }
}

// ============================================================================
// Auth stubs
// ============================================================================

/// Identity "hash" so login tests can store plain passwords.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(password.to_string())
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(password == hash)
    }
}

#[derive(Clone)]
pub struct StubAdminAccountRepository {
    accounts: Arc<Mutex<Vec<AdminAccount>>>,
    created: Arc<Mutex<Vec<String>>>,
}

impl StubAdminAccountRepository {
    pub fn empty() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Password hash is the plain password; pair with PlainTextHasher.
    pub fn with_account(email: &str, password: &str) -> Self {
        let repo = Self::empty();
        repo.accounts.lock().unwrap().push(AdminAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password.to_string(),
            created_at: Utc::now(),
        });
        repo
    }

    pub fn created_emails(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdminAccountRepository for StubAdminAccountRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn count(&self) -> Result<u64, AccountRepositoryError> {
        Ok(self.accounts.lock().unwrap().len() as u64)
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AccountRepositoryError> {
        let account = AdminAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.accounts.lock().unwrap().push(account.clone());
        self.created.lock().unwrap().push(email.to_string());
        Ok(account)
    }
}

#[derive(Clone)]
pub struct StubClientAccountRepository {
    accounts: Arc<Mutex<Vec<ClientAccount>>>,
}

impl StubClientAccountRepository {
    pub fn empty() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_account(email: &str, password: &str, profile_id: Uuid) -> Self {
        let repo = Self::empty();
        repo.accounts.lock().unwrap().push(ClientAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password.to_string(),
            profile_id,
            is_active: true,
            created_at: Utc::now(),
        });
        repo
    }

    pub fn disabled(self) -> Self {
        for account in self.accounts.lock().unwrap().iter_mut() {
            account.is_active = false;
        }
        self
    }
}

#[async_trait]
impl ClientAccountRepository for StubClientAccountRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ClientAccount>, AccountRepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        profile_id: Uuid,
    ) -> Result<ClientAccount, AccountRepositoryError> {
        let account = ClientAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            profile_id,
            is_active: true,
            created_at: Utc::now(),
        };
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }
}

// ============================================================================
// Default use-case stubs for TestAppStateBuilder
// ============================================================================

use crate::auth::application::use_cases::login_admin::{
    AdminLoginResult, ILoginAdminUseCase, LoginAdminError,
};
use crate::auth::application::use_cases::login_client::{
    ClientLoginResult, ILoginClientUseCase, LoginClientError,
};
use crate::matching::application::use_cases::count_matches::{
    CountMatchesError, ICountMatchesUseCase, MatchCountSummary,
};
use crate::matching::application::use_cases::find_matches::{
    FindMatchesError, IFindMatchesUseCase, MatchResults,
};
use crate::profile::application::use_cases::create_profile::{
    CreateProfileError, ICreateProfileUseCase, ProfileSubmission,
};
use crate::profile::application::use_cases::delete_profile::{
    DeleteProfileError, IDeleteProfileUseCase,
};
use crate::profile::application::use_cases::fetch_profile_by_id::{
    FetchProfileError, IFetchProfileByIdUseCase,
};
use crate::profile::application::use_cases::fetch_profiles::{
    FetchProfilesError, IFetchProfilesUseCase,
};
use crate::profile::application::use_cases::share_profile::{
    IShareProfileUseCase, ShareProfileError,
};
use crate::profile::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};

const UNUSED: &str = "not used in this test";

pub struct StubCreateProfileUseCase;

#[async_trait]
impl ICreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, _submission: ProfileSubmission) -> Result<Profile, CreateProfileError> {
        Err(CreateProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubFetchProfilesUseCase;

#[async_trait]
impl IFetchProfilesUseCase for StubFetchProfilesUseCase {
    async fn execute(
        &self,
        _filter: ProfileFilter,
    ) -> Result<(Vec<Profile>, Provenance), FetchProfilesError> {
        Err(FetchProfilesError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubFetchProfileByIdUseCase;

#[async_trait]
impl IFetchProfileByIdUseCase for StubFetchProfileByIdUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(Profile, Provenance), FetchProfileError> {
        Err(FetchProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _id: Uuid, _patch: ProfilePatch) -> Result<Profile, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteProfileUseCase;

#[async_trait]
impl IDeleteProfileUseCase for StubDeleteProfileUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProfileError> {
        Err(DeleteProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubShareProfileUseCase;

#[async_trait]
impl IShareProfileUseCase for StubShareProfileUseCase {
    async fn execute(&self, _id: Uuid) -> Result<i32, ShareProfileError> {
        Err(ShareProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubFindMatchesUseCase;

#[async_trait]
impl IFindMatchesUseCase for StubFindMatchesUseCase {
    async fn execute(&self, _profile_id: Uuid) -> Result<MatchResults, FindMatchesError> {
        Err(FindMatchesError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubCountMatchesUseCase;

#[async_trait]
impl ICountMatchesUseCase for StubCountMatchesUseCase {
    async fn execute(&self) -> Result<MatchCountSummary, CountMatchesError> {
        Err(CountMatchesError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AdminLoginResult, LoginAdminError> {
        Err(LoginAdminError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubLoginClientUseCase;

#[async_trait]
impl ILoginClientUseCase for StubLoginClientUseCase {
    async fn execute(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<ClientLoginResult, LoginClientError> {
        Err(LoginClientError::RepositoryError(UNUSED.to_string()))
    }
}
