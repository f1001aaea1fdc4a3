use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use ticketera_application::LoginUseCase;
use ticketera_core::{Email, Password, PasswordHasher, UserStore};

use super::error::ApiError;
use crate::auth::{JwtAuthConfig, generate_auth_token};
use crate::http::response::ApiJson;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H>(
    State((user_store, password_hasher, jwt_config)): State<(U, H, JwtAuthConfig)>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
{
    // A credential that cannot parse can also not exist; answer exactly as
    // a lookup miss would so nothing is revealed about which factor failed.
    let email =
        Email::try_from(request.email).map_err(|_| ApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| ApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(&user_store, &password_hasher);
    let user_id = use_case.execute(email, password).await?;

    let token = generate_auth_token(&user_id, &jwt_config)
        .map_err(|e| ApiError::TokenSigning(e.to_string()))?;

    Ok((StatusCode::OK, Json(TokenResponse { token })))
}
