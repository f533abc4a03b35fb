use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
