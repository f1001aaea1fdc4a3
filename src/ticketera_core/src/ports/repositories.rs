use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{
    email::Email,
    ticket::{Ticket, TicketId},
    user::User,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Operation timed out")]
    Timeout,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::Timeout, Self::Timeout) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `UserAlreadyExists` when the email is
    /// already taken - uniqueness is the store's constraint to enforce.
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
}

// TicketStore port trait and errors
#[derive(Debug, Error)]
pub enum TicketStoreError {
    #[error("Ticket not found")]
    TicketNotFound,
    #[error("Operation timed out")]
    Timeout,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TicketStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TicketNotFound, Self::TicketNotFound) => true,
            (Self::Timeout, Self::Timeout) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Result of a full scan: the tickets that decoded cleanly plus a count of
/// records skipped because their payload did not. Listing is lenient - one
/// malformed record never aborts the whole scan - but the failure signal is
/// kept so callers can log it.
#[derive(Debug, Default)]
pub struct TicketScan {
    pub tickets: Vec<Ticket>,
    pub skipped_malformed: usize,
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn insert(&self, ticket: Ticket) -> Result<(), TicketStoreError>;
    async fn find_all(&self) -> Result<TicketScan, TicketStoreError>;
    async fn find_by_id(&self, id: &TicketId) -> Result<Ticket, TicketStoreError>;
    /// Field-level overwrite of the stored document. Returns the number of
    /// documents matched; zero means the id did not exist.
    async fn update_fields(
        &self,
        id: &TicketId,
        fields: &Map<String, Value>,
    ) -> Result<u64, TicketStoreError>;
    /// Returns the number of documents deleted; zero means no match.
    async fn delete(&self, id: &TicketId) -> Result<u64, TicketStoreError>;
}
