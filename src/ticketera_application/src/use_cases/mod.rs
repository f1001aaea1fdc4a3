pub mod create_ticket;
pub mod delete_ticket;
pub mod get_ticket;
pub mod list_tickets;
pub mod login;
pub mod register;
pub mod update_ticket;
