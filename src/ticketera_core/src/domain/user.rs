use std::fmt;

use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password::PasswordHash};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password cannot be empty")]
    MissingPassword,
}

/// Opaque user identifier, assigned exactly once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User account record.
///
/// Deliberately does not implement `Serialize`: the password hash must never
/// cross a serialization boundary.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    password_hash: PasswordHash,
}

impl User {
    /// Create a new user, assigning a fresh identifier.
    pub fn new(name: String, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
        }
    }

    /// Rehydrate a user from stored fields.
    pub fn parse(
        id: Uuid,
        name: String,
        email: Secret<String>,
        password_hash: Secret<String>,
    ) -> Result<Self, UserError> {
        Ok(Self {
            id: UserId::from(id),
            name,
            email: Email::try_from(email)?,
            password_hash: PasswordHash::new(password_hash),
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
