pub mod account_repository;
pub mod password_hasher;
pub mod token_provider;

pub use account_repository::{
    AccountRepositoryError, AdminAccountRepository, ClientAccountRepository,
};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
