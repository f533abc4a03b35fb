use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AccountRepositoryError, AdminAccountRepository, PasswordHasher, TokenProvider,
};
use crate::auth::domain::entities::Role;

#[derive(Debug, Clone)]
pub enum LoginAdminError {
    InvalidCredentials,
    RepositoryError(String),
    TokenError(String),
}

#[derive(Debug, Clone)]
pub struct AdminLoginResult {
    pub admin_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str)
        -> Result<AdminLoginResult, LoginAdminError>;
}

pub struct LoginAdminUseCase<R>
where
    R: AdminAccountRepository,
{
    accounts: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LoginAdminUseCase<R>
where
    R: AdminAccountRepository,
{
    pub fn new(accounts: R, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> ILoginAdminUseCase for LoginAdminUseCase<R>
where
    R: AdminAccountRepository + Sync + Send,
{
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginResult, LoginAdminError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await
            .map_err(|AccountRepositoryError::DatabaseError(msg)| {
                LoginAdminError::RepositoryError(msg)
            })?
            .ok_or(LoginAdminError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify_password(password, &account.password_hash)
            .await
            .unwrap_or(false);

        if !verified {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.id, Role::Admin, None)
            .map_err(|e| LoginAdminError::TokenError(format!("{e:?}")))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(account.id, Role::Admin, None)
            .map_err(|e| LoginAdminError::TokenError(format!("{e:?}")))?;

        Ok(AdminLoginResult {
            admin_id: account.id,
            email: account.email,
            access_token,
            refresh_token,
        })
    }
}
