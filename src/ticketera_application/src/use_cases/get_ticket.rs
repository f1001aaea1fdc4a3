use ticketera_core::{Ticket, TicketId, TicketStore, TicketStoreError};

/// Error types specific to the get ticket use case
#[derive(Debug, thiserror::Error)]
pub enum GetTicketError {
    #[error("Ticket store error: {0}")]
    TicketStoreError(#[from] TicketStoreError),
}

/// Get ticket use case - direct read by identifier.
pub struct GetTicketUseCase<'a, T>
where
    T: TicketStore,
{
    ticket_store: &'a T,
}

impl<'a, T> GetTicketUseCase<'a, T>
where
    T: TicketStore,
{
    pub fn new(ticket_store: &'a T) -> Self {
        Self { ticket_store }
    }

    #[tracing::instrument(name = "GetTicketUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &TicketId) -> Result<Ticket, GetTicketError> {
        Ok(self.ticket_store.find_by_id(id).await?)
    }
}
