use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use ticketera_application::DeleteTicketUseCase;
use ticketera_core::{TicketId, TicketStore};

use super::error::ApiError;
use crate::http::response::StandardResponse;

#[tracing::instrument(name = "Delete ticket", skip_all, fields(id = %id))]
pub async fn delete_ticket<T>(
    State(ticket_store): State<T>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    T: TicketStore + 'static,
{
    let id = TicketId::parse(&id)?;

    let use_case = DeleteTicketUseCase::new(&ticket_store);
    use_case.execute(&id).await?;

    Ok((
        StatusCode::OK,
        Json(StandardResponse::message("Ticket eliminado correctamente")),
    ))
}
