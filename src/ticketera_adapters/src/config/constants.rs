use std::time::Duration;

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "TICKETERA_ALLOWED_ORIGINS";
}

/// Upper bound on any single store operation. A store call that exceeds this
/// fails with a timeout error instead of blocking the request indefinitely.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Bearer token validity window: 72 hours from issuance.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60 * 72;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
