use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use ticketera_application::{
    CreateTicketError, DeleteTicketError, GetTicketError, ListTicketsError, LoginError,
    RegisterError, UpdateTicketError,
};
use ticketera_core::{TicketError, TicketStoreError, UserError, UserStoreError};

use crate::auth::TokenAuthError;
use crate::http::response::StandardResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid ticket id: {0}")]
    InvalidTicketId(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            ApiError::InvalidBody(diagnostic) => (
                StatusCode::BAD_REQUEST,
                StandardResponse::with_error("Datos inválidos", diagnostic),
            ),
            ApiError::MissingPassword => (
                StatusCode::BAD_REQUEST,
                StandardResponse::message("La contraseña es obligatoria"),
            ),
            ApiError::InvalidTicketId(diagnostic) => (
                StatusCode::BAD_REQUEST,
                StandardResponse::with_error("ID inválido", diagnostic),
            ),
            // Lookup miss and password mismatch arrive here as the same
            // variant; the client can never tell which factor failed.
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                StandardResponse::message("Credenciales incorrectas"),
            ),
            ApiError::InvalidToken(diagnostic) => (
                StatusCode::UNAUTHORIZED,
                StandardResponse::with_error("Token inválido", diagnostic),
            ),
            ApiError::EmailTaken => (
                StatusCode::CONFLICT,
                StandardResponse::message("El email ya está registrado"),
            ),
            ApiError::TicketNotFound => (
                StatusCode::NOT_FOUND,
                StandardResponse::message("Ticket no encontrado"),
            ),
            ApiError::TokenSigning(diagnostic) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StandardResponse::with_error("Error al generar token", diagnostic),
            ),
            ApiError::UnexpectedError(diagnostic) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StandardResponse::with_error("Error interno", diagnostic),
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::MissingPassword => ApiError::MissingPassword,
            UserError::InvalidEmail => ApiError::InvalidBody(error.to_string()),
        }
    }
}

impl From<TicketError> for ApiError {
    fn from(error: TicketError) -> Self {
        match error {
            TicketError::InvalidId(diagnostic) => ApiError::InvalidTicketId(diagnostic),
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::EmailTaken,
            UserStoreError::UserNotFound => ApiError::InvalidCredentials,
            UserStoreError::Timeout | UserStoreError::UnexpectedError(_) => {
                ApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<TicketStoreError> for ApiError {
    fn from(error: TicketStoreError) -> Self {
        match error {
            TicketStoreError::TicketNotFound => ApiError::TicketNotFound,
            TicketStoreError::Timeout | TicketStoreError::UnexpectedError(_) => {
                ApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<TokenAuthError> for ApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::InvalidToken | TokenAuthError::TokenError(_) => {
                ApiError::InvalidToken(error.to_string())
            }
            TokenAuthError::UnexpectedError(diagnostic) => ApiError::UnexpectedError(diagnostic),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::PasswordHasherError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::PasswordHasherError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<ListTicketsError> for ApiError {
    fn from(error: ListTicketsError) -> Self {
        match error {
            ListTicketsError::TicketStoreError(e) => e.into(),
        }
    }
}

impl From<CreateTicketError> for ApiError {
    fn from(error: CreateTicketError) -> Self {
        match error {
            CreateTicketError::TicketStoreError(e) => e.into(),
        }
    }
}

impl From<GetTicketError> for ApiError {
    fn from(error: GetTicketError) -> Self {
        match error {
            GetTicketError::TicketStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateTicketError> for ApiError {
    fn from(error: UpdateTicketError) -> Self {
        match error {
            UpdateTicketError::TicketStoreError(e) => e.into(),
        }
    }
}

impl From<DeleteTicketError> for ApiError {
    fn from(error: DeleteTicketError) -> Self {
        match error {
            DeleteTicketError::TicketStoreError(e) => e.into(),
        }
    }
}
