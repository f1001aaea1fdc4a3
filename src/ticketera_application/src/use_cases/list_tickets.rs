use ticketera_core::{Ticket, TicketStore, TicketStoreError};

/// Error types specific to the list tickets use case
#[derive(Debug, thiserror::Error)]
pub enum ListTicketsError {
    #[error("Ticket store error: {0}")]
    TicketStoreError(#[from] TicketStoreError),
}

/// List tickets use case - returns every stored ticket in store-native order.
pub struct ListTicketsUseCase<'a, T>
where
    T: TicketStore,
{
    ticket_store: &'a T,
}

impl<'a, T> ListTicketsUseCase<'a, T>
where
    T: TicketStore,
{
    pub fn new(ticket_store: &'a T) -> Self {
        Self { ticket_store }
    }

    /// Records whose payload fails to decode are skipped rather than failing
    /// the whole listing; the skip count is surfaced in the logs.
    #[tracing::instrument(name = "ListTicketsUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<Ticket>, ListTicketsError> {
        let scan = self.ticket_store.find_all().await?;

        if scan.skipped_malformed > 0 {
            tracing::warn!(
                skipped = scan.skipped_malformed,
                "skipped malformed ticket records during listing"
            );
        }

        Ok(scan.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};
    use ticketera_core::{TicketId, TicketScan};

    struct MockTicketStore {
        tickets: Vec<Ticket>,
        skipped: usize,
    }

    #[async_trait::async_trait]
    impl TicketStore for MockTicketStore {
        async fn insert(&self, _ticket: Ticket) -> Result<(), TicketStoreError> {
            unimplemented!()
        }

        async fn find_all(&self) -> Result<TicketScan, TicketStoreError> {
            Ok(TicketScan {
                tickets: self.tickets.clone(),
                skipped_malformed: self.skipped,
            })
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
            unimplemented!()
        }
    }

    fn ticket(title: &str) -> Ticket {
        let mut fields = Map::new();
        fields.insert("title".to_string(), json!(title));
        Ticket::new(fields)
    }

    #[tokio::test]
    async fn test_list_returns_decoded_tickets_despite_skips() {
        let ticket_store = MockTicketStore {
            tickets: vec![ticket("a"), ticket("b")],
            skipped: 3,
        };
        let use_case = ListTicketsUseCase::new(&ticket_store);

        let tickets = use_case.execute().await.unwrap();
        assert_eq!(tickets.len(), 2);
    }

    #[tokio::test]
    async fn test_list_empty_store_yields_empty_list() {
        let ticket_store = MockTicketStore {
            tickets: vec![],
            skipped: 0,
        };
        let use_case = ListTicketsUseCase::new(&ticket_store);

        let tickets = use_case.execute().await.unwrap();
        assert!(tickets.is_empty());
    }
}
