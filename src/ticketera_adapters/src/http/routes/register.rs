use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use ticketera_application::RegisterUseCase;
use ticketera_core::{Email, Password, PasswordHasher, UserStore};

use super::error::ApiError;
use crate::http::response::{ApiJson, StandardResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
{
    let password = Password::try_from(request.password)?;
    let email = Email::try_from(request.email)?;

    let use_case = RegisterUseCase::new(&user_store, &password_hasher);
    use_case.execute(request.name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(StandardResponse::message("Usuario registrado exitosamente")),
    ))
}
