use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::domain::entities::{AdminAccount, ClientAccount};

#[derive(Debug, Clone)]
pub enum AccountRepositoryError {
    DatabaseError(String),
}

#[async_trait]
pub trait AdminAccountRepository: Send + Sync {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError>;

    async fn count(&self) -> Result<u64, AccountRepositoryError>;

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AccountRepositoryError>;
}

#[async_trait]
pub trait ClientAccountRepository: Send + Sync {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ClientAccount>, AccountRepositoryError>;

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        profile_id: Uuid,
    ) -> Result<ClientAccount, AccountRepositoryError>;
}
