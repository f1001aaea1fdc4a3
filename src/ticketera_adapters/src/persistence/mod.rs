pub mod hashmap_ticket_store;
pub mod hashmap_user_store;
pub mod postgres_ticket_store;
pub mod postgres_user_store;

pub use hashmap_ticket_store::HashMapTicketStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_ticket_store::PostgresTicketStore;
pub use postgres_user_store::PostgresUserStore;
