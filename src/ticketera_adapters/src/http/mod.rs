pub mod response;
pub mod routes;

pub use response::{ApiJson, StandardResponse};
pub use routes::ApiError;
