use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use ticketera_application::ListTicketsUseCase;
use ticketera_core::TicketStore;

use super::error::ApiError;

#[tracing::instrument(name = "List tickets", skip_all)]
pub async fn list_tickets<T>(
    State(ticket_store): State<T>,
) -> Result<impl IntoResponse, ApiError>
where
    T: TicketStore + 'static,
{
    let use_case = ListTicketsUseCase::new(&ticket_store);
    let tickets = use_case.execute().await?;

    Ok((StatusCode::OK, Json(tickets)))
}
