pub mod photo_host;
pub mod profile_repository;

pub use photo_host::{PhotoHost, PhotoHostError};
pub use profile_repository::{
    CreateProfileData, ProfileFilter, ProfilePatch, ProfileRepository, ProfileRepositoryError,
    ProfileSource, Provenance,
};
