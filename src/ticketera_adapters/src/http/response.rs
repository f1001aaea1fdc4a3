use axum::{Json, extract::FromRequest, extract::Request};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::routes::error::ApiError;

/// The uniform response envelope: a human-readable message plus an optional
/// lower-level diagnostic, present only when one exists.
#[derive(Debug, Serialize, Deserialize)]
pub struct StandardResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StandardResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// JSON extractor that converts body rejections into the standard envelope
/// instead of axum's default plain-text response.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.to_string()))?;

        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_is_omitted_when_absent() {
        let body = serde_json::to_value(StandardResponse::message("ok")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "ok"}));
    }

    #[test]
    fn test_error_field_is_present_when_set() {
        let body = serde_json::to_value(StandardResponse::with_error("fallo", "boom")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "fallo", "error": "boom"}));
    }
}
