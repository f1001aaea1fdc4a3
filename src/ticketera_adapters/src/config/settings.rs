use axum::http::HeaderValue;
use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{TOKEN_TTL_SECONDS, env, prod};

/// CORS origins the service will answer to. Empty means no CORS layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketeraSettings {
    pub app: AppSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl TicketeraSettings {
    /// Load settings from an optional `config.json` plus environment
    /// overrides. The JWT secret and database URL come from the environment
    /// in production; a missing secret fails startup.
    pub fn load() -> Self {
        Self::try_load().expect("Failed to load configuration")
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("auth.jwt.time_to_live", TOKEN_TTL_SECONDS)?
            .add_source(File::with_name("config").required(false));

        if let Ok(url) = std::env::var(env::DATABASE_URL_ENV_VAR) {
            builder = builder.set_override("postgres.url", url)?;
        }
        if let Ok(secret) = std::env::var(env::JWT_SECRET_ENV_VAR) {
            builder = builder.set_override("auth.jwt.secret", secret)?;
        }
        if let Ok(origins) = std::env::var(env::ALLOWED_ORIGINS_ENV_VAR) {
            let origins: Vec<String> = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
            builder = builder.set_override("app.allowed_origins", origins)?;
        }

        builder.build()?.try_deserialize()
    }
}
