pub mod helpers;
pub mod service;
pub mod tracing;

pub use helpers::get_postgres_pool;
pub use service::TicketeraService;
