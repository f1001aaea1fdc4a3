use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use ticketera_application::GetTicketUseCase;
use ticketera_core::{TicketId, TicketStore};

use super::error::ApiError;

#[tracing::instrument(name = "Get ticket", skip_all, fields(id = %id))]
pub async fn get_ticket<T>(
    State(ticket_store): State<T>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    T: TicketStore + 'static,
{
    // Identifier validation happens before any store access.
    let id = TicketId::parse(&id)?;

    let use_case = GetTicketUseCase::new(&ticket_store);
    let ticket = use_case.execute(&id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}
