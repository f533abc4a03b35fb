use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    AccountRepositoryError, AdminAccountRepository, PasswordHasher,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapAdminError {
    #[error("missing configuration: {0}")]
    MissingConfig(String),
    #[error("password hashing failed")]
    HashError,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Seeds the first admin account from ADMIN_DEFAULT_EMAIL and
/// ADMIN_DEFAULT_PASSWORD when the admins table is empty. A no-op on
/// every later startup.
pub struct BootstrapAdminUseCase<R>
where
    R: AdminAccountRepository,
{
    accounts: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> BootstrapAdminUseCase<R>
where
    R: AdminAccountRepository,
{
    pub fn new(accounts: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    pub async fn execute(&self) -> Result<bool, BootstrapAdminError> {
        let existing = self
            .accounts
            .count()
            .await
            .map_err(|AccountRepositoryError::DatabaseError(msg)| {
                BootstrapAdminError::RepositoryError(msg)
            })?;

        if existing > 0 {
            return Ok(false);
        }

        let email = std::env::var("ADMIN_DEFAULT_EMAIL")
            .map_err(|_| BootstrapAdminError::MissingConfig("ADMIN_DEFAULT_EMAIL".into()))?;
        let password = std::env::var("ADMIN_DEFAULT_PASSWORD")
            .map_err(|_| BootstrapAdminError::MissingConfig("ADMIN_DEFAULT_PASSWORD".into()))?;

        let hash = self
            .hasher
            .hash_password(&password)
            .await
            .map_err(|_| BootstrapAdminError::HashError)?;

        self.accounts
            .create(&email, &hash)
            .await
            .map_err(|AccountRepositoryError::DatabaseError(msg)| {
                BootstrapAdminError::RepositoryError(msg)
            })?;

        tracing::info!(email = %email, "Seeded initial admin account");
        Ok(true)
    }
}
