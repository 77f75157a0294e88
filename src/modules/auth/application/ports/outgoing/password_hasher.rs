#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Failed to hash password")]
    HashFailed,

    #[error("Failed to verify password")]
    VerifyFailed,
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError>;
}
