use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password mismatch")]
    PasswordMismatch,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Port trait for the one-way salted password hasher.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;
    /// Verify a candidate against a stored hash. The underlying comparison
    /// must be the hash function's own constant-time verify.
    async fn verify(
        &self,
        hash: &PasswordHash,
        candidate: Password,
    ) -> Result<(), PasswordHasherError>;
}
