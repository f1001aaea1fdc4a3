pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::{Password, PasswordHash},
    ticket::{Ticket, TicketError, TicketId},
    user::{User, UserError, UserId},
};

pub use ports::{
    repositories::{TicketScan, TicketStore, TicketStoreError, UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
