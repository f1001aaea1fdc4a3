use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};
use ticketera_application::CreateTicketUseCase;
use ticketera_core::TicketStore;

use super::error::ApiError;
use crate::http::response::ApiJson;

#[tracing::instrument(name = "Create ticket", skip_all)]
pub async fn create_ticket<T>(
    State(ticket_store): State<T>,
    ApiJson(fields): ApiJson<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError>
where
    T: TicketStore + 'static,
{
    let use_case = CreateTicketUseCase::new(&ticket_store);
    let ticket = use_case.execute(fields).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}
