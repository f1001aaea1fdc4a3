use serde_json::{Map, Value};
use ticketera_core::{TicketId, TicketStore, TicketStoreError};

/// Error types specific to the update ticket use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateTicketError {
    #[error("Ticket store error: {0}")]
    TicketStoreError(#[from] TicketStoreError),
}

/// Update ticket use case - field-level overwrite of a stored document.
pub struct UpdateTicketUseCase<'a, T>
where
    T: TicketStore,
{
    ticket_store: &'a T,
}

impl<'a, T> UpdateTicketUseCase<'a, T>
where
    T: TicketStore,
{
    pub fn new(ticket_store: &'a T) -> Self {
        Self { ticket_store }
    }

    /// An update that matches nothing still succeeds: no existence check is
    /// performed before or after the write. The zero-match case is logged so
    /// the gap stays visible.
    #[tracing::instrument(name = "UpdateTicketUseCase::execute", skip(self, fields))]
    pub async fn execute(
        &self,
        id: &TicketId,
        mut fields: Map<String, Value>,
    ) -> Result<(), UpdateTicketError> {
        // The identifier belongs to the server; a client cannot move a ticket.
        fields.remove("id");

        let matched = self.ticket_store.update_fields(id, &fields).await?;
        if matched == 0 {
            tracing::warn!(%id, "update matched no ticket");
        }

        Ok(())
    }
}
