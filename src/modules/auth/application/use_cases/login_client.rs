use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AccountRepositoryError, ClientAccountRepository, PasswordHasher, TokenProvider,
};
use crate::auth::domain::entities::Role;

#[derive(Debug, Clone)]
pub enum LoginClientError {
    InvalidCredentials,
    AccountDisabled,
    RepositoryError(String),
    TokenError(String),
}

#[derive(Debug, Clone)]
pub struct ClientLoginResult {
    pub client_id: Uuid,
    pub profile_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait ILoginClientUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ClientLoginResult, LoginClientError>;
}

pub struct LoginClientUseCase<R>
where
    R: ClientAccountRepository,
{
    accounts: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LoginClientUseCase<R>
where
    R: ClientAccountRepository,
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
impl<R> ILoginClientUseCase for LoginClientUseCase<R>
where
    R: ClientAccountRepository + Sync + Send,
{
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ClientLoginResult, LoginClientError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await
            .map_err(|AccountRepositoryError::DatabaseError(msg)| {
                LoginClientError::RepositoryError(msg)
            })?
            .ok_or(LoginClientError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify_password(password, &account.password_hash)
            .await
            .unwrap_or(false);

        if !verified {
            return Err(LoginClientError::InvalidCredentials);
        }

        // Disabled accounts keep their password valid but cannot sign in.
        if !account.is_active {
            return Err(LoginClientError::AccountDisabled);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.id, Role::Client, Some(account.profile_id))
            .map_err(|e| LoginClientError::TokenError(format!("{e:?}")))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(account.id, Role::Client, Some(account.profile_id))
            .map_err(|e| LoginClientError::TokenError(format!("{e:?}")))?;

        Ok(ClientLoginResult {
            client_id: account.id,
            profile_id: account.profile_id,
            email: account.email,
            access_token,
            refresh_token,
        })
    }
}
