pub mod argon2_hasher;
pub mod jwt;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::{Claims, JwtAuthConfig, TokenAuthError, generate_auth_token, validate_auth_token};
