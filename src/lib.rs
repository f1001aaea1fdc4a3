//! # Ticketera - Ticketing Backend Library
//!
//! This is a facade crate that re-exports all public APIs from the ticketing
//! service components. Use this crate to get access to the whole system in
//! one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `Ticket`, etc.
//! - **Repository traits**: `UserStore`, `TicketStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, the ticket CRUD cases
//! - **Adapters**: `PostgresUserStore`, `HashMapTicketStore`,
//!   `Argon2PasswordHasher`, the JWT module, configuration
//! - **Service**: `TicketeraService` - the assembled HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use ticketera_core::*;
}

// Re-export most commonly used core types at the root level
pub use ticketera_core::{
    Email, Password, PasswordHash, Ticket, TicketError, TicketId, User, UserError, UserId,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use ticketera_core::{
        TicketScan, TicketStore, TicketStoreError, UserStore, UserStoreError,
    };
}

// Re-export repository traits at root level
pub use ticketera_core::{
    PasswordHasher, PasswordHasherError, TicketScan, TicketStore, TicketStoreError, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use ticketera_application::*;
}

// Re-export use cases at root level
pub use ticketera_application::{
    CreateTicketUseCase, DeleteTicketUseCase, GetTicketUseCase, ListTicketsUseCase, LoginUseCase,
    RegisterUseCase, UpdateTicketUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use ticketera_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use ticketera_adapters::persistence::*;
    }

    /// JWT and password-hashing utilities
    pub mod auth {
        pub use ticketera_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use ticketera_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use ticketera_adapters::{
    auth::{Argon2PasswordHasher, JwtAuthConfig},
    config::TicketeraSettings,
    persistence::{
        HashMapTicketStore, HashMapUserStore, PostgresTicketStore, PostgresUserStore,
    },
};

// ============================================================================
// Ticketera Service (Main Entry Point)
// ============================================================================

/// Main ticketing service
pub use ticketera_service::{TicketeraService, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
