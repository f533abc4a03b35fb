use async_trait::async_trait;

use crate::profile::domain::entities::PhotoRef;

#[derive(Debug, Clone)]
pub enum PhotoHostError {
    InvalidImage(String),
    AccessDenied,
    Infrastructure(String),
}

/// External photo hosting collaborator. The scorer and matcher never
/// touch this; only the profile create/delete paths do.
#[async_trait]
pub trait PhotoHost: Send + Sync {
    /// Upload an inline base64 data URI, returning the public URL and the
    /// key needed to delete the object later.
    async fn upload(&self, data_uri: &str) -> Result<PhotoRef, PhotoHostError>;

    /// Delete a previously uploaded object. Returns false when the host
    /// reports the object as already gone.
    async fn delete(&self, object_key: &str) -> Result<bool, PhotoHostError>;
}
