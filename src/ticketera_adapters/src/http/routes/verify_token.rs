use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use super::error::ApiError;
use crate::auth::{JwtAuthConfig, validate_auth_token};
use crate::http::response::{ApiJson, StandardResponse};

#[derive(Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Validate a previously issued bearer token: signature and expiry.
///
/// Nothing else in the system consumes tokens yet; this route (and the
/// validator behind it) is the reusable guard a protected surface would
/// build on.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token(
    State(jwt_config): State<JwtAuthConfig>,
    ApiJson(request): ApiJson<VerifyTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_auth_token(&request.token, &jwt_config)?;

    Ok((
        StatusCode::OK,
        Json(StandardResponse::message("Token válido")),
    ))
}
