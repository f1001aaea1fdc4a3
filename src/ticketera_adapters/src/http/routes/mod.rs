pub mod create_ticket;
pub mod delete_ticket;
pub mod error;
pub mod get_ticket;
pub mod list_tickets;
pub mod login;
pub mod register;
pub mod update_ticket;
pub mod verify_token;

pub use create_ticket::create_ticket;
pub use delete_ticket::delete_ticket;
pub use error::ApiError;
pub use get_ticket::get_ticket;
pub use list_tickets::list_tickets;
pub use login::{LoginRequest, TokenResponse, login};
pub use register::{RegisterRequest, register};
pub use update_ticket::update_ticket;
pub use verify_token::{VerifyTokenRequest, verify_token};
