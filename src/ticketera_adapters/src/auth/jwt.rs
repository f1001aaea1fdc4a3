use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ticketera_core::UserId;

/// Signing configuration, initialized once at process start and passed to
/// the routes as explicit state so tests can inject a fixed key.
#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Bearer token claims: the authenticated user and an absolute expiry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: usize,
}

// Create a signed JWT carrying the user id, expiring ttl seconds from now
pub fn generate_auth_token(
    user_id: &UserId,
    config: &JwtAuthConfig,
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    // Cast exp to a usize, which is what Claims expects
    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        user_id: user_id.to_string(),
        exp,
    };

    create_token(&claims, config.as_bytes())
}

// Check that a token was signed with our secret and has not expired
pub fn validate_auth_token(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenAuthError> {
    encode(
        &jsonwebtoken::Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenAuthError::TokenError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::TOKEN_TTL_SECONDS;

    fn jwt_auth_config() -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: Secret::from("secret".to_owned()),
            token_ttl_in_seconds: TOKEN_TTL_SECONDS,
        }
    }

    #[test]
    fn test_generate_auth_token_has_three_segments() {
        let config = jwt_auth_config();
        let token = generate_auth_token(&UserId::new(), &config).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_token_expires_seventy_two_hours_after_issuance() {
        let config = jwt_auth_config();
        let user_id = UserId::new();

        let issued_at = Utc::now().timestamp() as usize;
        let token = generate_auth_token(&user_id, &config).unwrap();
        let claims = validate_auth_token(&token, &config).unwrap();

        let expected = issued_at + TOKEN_TTL_SECONDS as usize;
        // Allow a second of clock movement between issuance and the assertion.
        assert!(claims.exp >= expected && claims.exp <= expected + 1);
    }

    #[test]
    fn test_validate_token_roundtrip_carries_user_id() {
        let config = jwt_auth_config();
        let user_id = UserId::new();

        let token = generate_auth_token(&user_id, &config).unwrap();
        let claims = validate_auth_token(&token, &config).unwrap();

        assert_eq!(claims.user_id, user_id.to_string());
    }

    #[test]
    fn test_validate_rejects_garbage_token() {
        let config = jwt_auth_config();
        assert!(validate_auth_token("invalid_token", &config).is_err());
    }

    #[test]
    fn test_validate_rejects_token_signed_with_other_secret() {
        let config = jwt_auth_config();
        let other = JwtAuthConfig {
            jwt_secret: Secret::from("another-secret".to_owned()),
            token_ttl_in_seconds: TOKEN_TTL_SECONDS,
        };

        let token = generate_auth_token(&UserId::new(), &other).unwrap();
        assert!(validate_auth_token(&token, &config).is_err());
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        // Issue a token that expired well past the validator's leeway.
        let config = JwtAuthConfig {
            jwt_secret: Secret::from("secret".to_owned()),
            token_ttl_in_seconds: -120,
        };

        let token = generate_auth_token(&UserId::new(), &config).unwrap();
        assert!(validate_auth_token(&token, &config).is_err());
    }
}
