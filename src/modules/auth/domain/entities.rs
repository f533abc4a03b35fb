use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A login bound to exactly one profile. Disabled accounts keep their
/// row but cannot authenticate.
#[derive(Debug, Clone)]
pub struct ClientAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub profile_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
