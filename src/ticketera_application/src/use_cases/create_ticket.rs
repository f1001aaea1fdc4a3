use serde_json::{Map, Value};
use ticketera_core::{Ticket, TicketStore, TicketStoreError};

/// Error types specific to the create ticket use case
#[derive(Debug, thiserror::Error)]
pub enum CreateTicketError {
    #[error("Ticket store error: {0}")]
    TicketStoreError(#[from] TicketStoreError),
}

/// Create ticket use case - assigns an identifier and persists the document.
pub struct CreateTicketUseCase<'a, T>
where
    T: TicketStore,
{
    ticket_store: &'a T,
}

impl<'a, T> CreateTicketUseCase<'a, T>
where
    T: TicketStore,
{
    pub fn new(ticket_store: &'a T) -> Self {
        Self { ticket_store }
    }

    /// Persist a new ticket built from the client payload. Any identifier in
    /// the payload is ignored; the returned ticket carries the assigned one.
    #[tracing::instrument(name = "CreateTicketUseCase::execute", skip_all)]
    pub async fn execute(&self, fields: Map<String, Value>) -> Result<Ticket, CreateTicketError> {
        let ticket = Ticket::new(fields);
        self.ticket_store.insert(ticket.clone()).await?;
        Ok(ticket)
    }
}
