use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::domain::entities::Role;

#[derive(Debug, Clone)]
pub enum TokenError {
    EncodingError(String),
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    MalformedToken,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
    pub role: Role,
    /// Set for client sessions only: the one profile the account owns.
    pub profile_id: Option<Uuid>,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(
        &self,
        subject: Uuid,
        role: Role,
        profile_id: Option<Uuid>,
    ) -> Result<String, TokenError>;

    fn generate_refresh_token(
        &self,
        subject: Uuid,
        role: Role,
        profile_id: Option<Uuid>,
    ) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
