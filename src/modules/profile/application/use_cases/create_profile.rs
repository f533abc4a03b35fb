use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{
    CreateProfileData, PhotoHost, PhotoHostError, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::{
    validate_age, validate_siblings, Profile, ProfileValidationError,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum CreateProfileError {
    Validation(ProfileValidationError),
    PhotoUpload(String),
    RepositoryError(String),
}

/// A public form submission: profile data plus an optional inline photo.
#[derive(Debug, Clone)]
pub struct ProfileSubmission {
    pub data: CreateProfileData,
    pub photo_data_uri: Option<String>,
}

#[async_trait]
pub trait ICreateProfileUseCase: Send + Sync {
    async fn execute(&self, submission: ProfileSubmission) -> Result<Profile, CreateProfileError>;
}

pub struct CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    repository: R,
    photo_host: Arc<dyn PhotoHost>,
}

impl<R> CreateProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, photo_host: Arc<dyn PhotoHost>) -> Self {
        Self {
            repository,
            photo_host,
        }
    }
}

fn validate(data: &CreateProfileData) -> Result<(), ProfileValidationError> {
    if data.name.trim().is_empty() {
        return Err(ProfileValidationError::MissingField("name"));
    }
    validate_age(data.age)?;
    validate_siblings(
        data.brothers,
        data.married_brothers,
        data.sisters,
        data.married_sisters,
    )
}

#[async_trait]
impl<R> ICreateProfileUseCase for CreateProfileUseCase<R>
where
    R: ProfileRepository + Sync + Send,
{
    async fn execute(&self, submission: ProfileSubmission) -> Result<Profile, CreateProfileError> {
        let mut data = submission.data;

        validate(&data).map_err(CreateProfileError::Validation)?;

        if let Some(data_uri) = submission.photo_data_uri.as_deref() {
            let photo = self.photo_host.upload(data_uri).await.map_err(|e| match e {
                PhotoHostError::InvalidImage(msg) => CreateProfileError::PhotoUpload(msg),
                PhotoHostError::AccessDenied => {
                    CreateProfileError::PhotoUpload("photo host denied access".to_string())
                }
                PhotoHostError::Infrastructure(msg) => CreateProfileError::PhotoUpload(msg),
            })?;
            data.photo = Some(photo);
        }

        self.repository.create(data).await.map_err(|e| match e {
            ProfileRepositoryError::DatabaseError(msg)
            | ProfileRepositoryError::Unavailable(msg) => CreateProfileError::RepositoryError(msg),
            ProfileRepositoryError::NotFound => {
                CreateProfileError::RepositoryError("unexpected not-found on create".to_string())
            }
        })
    }
}
