use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{PhotoHost, PhotoHostError};
use crate::profile::domain::entities::PhotoRef;

fn photo_bucket() -> String {
    std::env::var("PHOTO_BUCKET").unwrap_or_else(|_| "rishtadesk-photos".to_string())
}

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_url(bucket: &str, object_key: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_key)
}

/// Only formats the intake form accepts. The extension doubles as the
/// object name suffix.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Split a `data:image/...;base64,...` URI into content type and raw bytes.
fn parse_data_uri(data_uri: &str) -> Result<(String, Vec<u8>), PhotoHostError> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| PhotoHostError::InvalidImage("not a data URI".to_string()))?;

    let (content_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| PhotoHostError::InvalidImage("missing base64 payload".to_string()))?;

    if extension_for(content_type).is_none() {
        return Err(PhotoHostError::InvalidImage(format!(
            "unsupported content type: {content_type}"
        )));
    }

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PhotoHostError::InvalidImage(format!("invalid base64 payload: {e}")))?;

    if bytes.is_empty() {
        return Err(PhotoHostError::InvalidImage("empty image payload".to_string()));
    }

    Ok((content_type.to_string(), bytes))
}

fn map_write_error(msg: &str) -> PhotoHostError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        PhotoHostError::AccessDenied
    } else {
        PhotoHostError::Infrastructure(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking google-cloud-storage types.
///
/// Tests will implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object_bytes(bucket_resource, object_name, content_type, bytes)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Production adapter: hosts profile photos on Google Cloud Storage.
#[derive(Clone)]
pub struct GcsPhotoHost {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsPhotoHost {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: photo_bucket(),
        }
    }

    /// Get or initialize the GCS client.
    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

impl Default for GcsPhotoHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoHost for GcsPhotoHost {
    async fn upload(&self, data_uri: &str) -> Result<PhotoRef, PhotoHostError> {
        let (content_type, bytes) = parse_data_uri(data_uri)?;
        // parse_data_uri already rejected unknown content types
        let ext = extension_for(&content_type).unwrap_or("jpg");

        let client = self
            .get_client()
            .await
            .map_err(|e| PhotoHostError::Infrastructure(e.to_string()))?;

        let object_key = format!("profiles/{}.{}", Uuid::new_v4(), ext);
        let bucket = bucket_resource(&self.bucket);

        client
            .upload_object_bytes(&bucket, &object_key, &content_type, bytes)
            .await
            .map_err(|e| map_write_error(&e))?;

        Ok(PhotoRef {
            url: public_url(&self.bucket, &object_key),
            object_key,
        })
    }

    async fn delete(&self, object_key: &str) -> Result<bool, PhotoHostError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| PhotoHostError::Infrastructure(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);

        match client.delete_object(&bucket, object_key).await {
            Ok(()) => Ok(true),
            Err(e) => {
                let m = e.to_lowercase();
                if m.contains("404") || m.contains("not found") {
                    Ok(false)
                } else {
                    Err(map_write_error(&e))
                }
            }
        }
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
