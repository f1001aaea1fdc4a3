use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};
use ticketera_application::UpdateTicketUseCase;
use ticketera_core::{TicketId, TicketStore};

use super::error::ApiError;
use crate::http::response::{ApiJson, StandardResponse};

#[tracing::instrument(name = "Update ticket", skip_all, fields(id = %id))]
pub async fn update_ticket<T>(
    State(ticket_store): State<T>,
    Path(id): Path<String>,
    ApiJson(fields): ApiJson<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError>
where
    T: TicketStore + 'static,
{
    let id = TicketId::parse(&id)?;

    let use_case = UpdateTicketUseCase::new(&ticket_store);
    use_case.execute(&id, fields).await?;

    Ok((
        StatusCode::OK,
        Json(StandardResponse::message("Ticket actualizado correctamente")),
    ))
}
