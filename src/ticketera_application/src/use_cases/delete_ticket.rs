use ticketera_core::{TicketId, TicketStore, TicketStoreError};

/// Error types specific to the delete ticket use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteTicketError {
    #[error("Ticket store error: {0}")]
    TicketStoreError(#[from] TicketStoreError),
}

/// Delete ticket use case.
pub struct DeleteTicketUseCase<'a, T>
where
    T: TicketStore,
{
    ticket_store: &'a T,
}

impl<'a, T> DeleteTicketUseCase<'a, T>
where
    T: TicketStore,
{
    pub fn new(ticket_store: &'a T) -> Self {
        Self { ticket_store }
    }

    /// Deleting a missing ticket still succeeds, mirroring the update path;
    /// the zero-match case is logged.
    #[tracing::instrument(name = "DeleteTicketUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &TicketId) -> Result<(), DeleteTicketError> {
        let matched = self.ticket_store.delete(id).await?;
        if matched == 0 {
            tracing::warn!(%id, "delete matched no ticket");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};
    use ticketera_core::{Ticket, TicketScan};

    struct MockTicketStore {
        matched: u64,
    }

    #[async_trait::async_trait]
    impl TicketStore for MockTicketStore {
        async fn insert(&self, _ticket: Ticket) -> Result<(), TicketStoreError> {
            unimplemented!()
        }

        async fn find_all(&self) -> Result<TicketScan, TicketStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: &TicketId) -> Result<Ticket, TicketStoreError> {
            unimplemented!()
        }

        async fn update_fields(
            &self,
            _id: &TicketId,
            _fields: &Map<String, Value>,
        ) -> Result<u64, TicketStoreError> {
            unimplemented!()
        }

        async fn delete(&self, _id: &TicketId) -> Result<u64, TicketStoreError> {
            Ok(self.matched)
        }
    }

    #[tokio::test]
    async fn test_delete_existing_ticket() {
        let ticket_store = MockTicketStore { matched: 1 };
        let use_case = DeleteTicketUseCase::new(&ticket_store);
        assert!(use_case.execute(&TicketId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_matching_nothing_still_succeeds() {
        let ticket_store = MockTicketStore { matched: 0 };
        let use_case = DeleteTicketUseCase::new(&ticket_store);
        assert!(use_case.execute(&TicketId::new()).await.is_ok());
    }
}
