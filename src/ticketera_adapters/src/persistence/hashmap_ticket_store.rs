use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use serde_json::{Map, Value};
use ticketera_core::{Ticket, TicketId, TicketScan, TicketStore, TicketStoreError};

/// In-memory ticket store for tests and local runs.
#[derive(Default, Clone)]
pub struct HashMapTicketStore {
    tickets: Arc<RwLock<HashMap<TicketId, Ticket>>>,
}

impl HashMapTicketStore {
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl TicketStore for HashMapTicketStore {
    async fn insert(&self, ticket: Ticket) -> Result<(), TicketStoreError> {
        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.id(), ticket);
        Ok(())
    }

    async fn find_all(&self) -> Result<TicketScan, TicketStoreError> {
        let tickets = self.tickets.read().await;
        Ok(TicketScan {
            tickets: tickets.values().cloned().collect(),
            skipped_malformed: 0,
        })
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Ticket, TicketStoreError> {
        let tickets = self.tickets.read().await;
        tickets
            .get(id)
            .cloned()
            .ok_or(TicketStoreError::TicketNotFound)
    }

    async fn update_fields(
        &self,
        id: &TicketId,
        fields: &Map<String, Value>,
    ) -> Result<u64, TicketStoreError> {
        let mut tickets = self.tickets.write().await;
        match tickets.get_mut(id) {
            Some(ticket) => {
                ticket.overwrite_fields(fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &TicketId) -> Result<u64, TicketStoreError> {
        let mut tickets = self.tickets.write().await;
        Ok(tickets.remove(id).map(|_| 1).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields_from(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let store = HashMapTicketStore::new();
        let ticket = Ticket::new(fields_from(json!({"title": "t"})));
        let id = ticket.id();

        store.insert(ticket).await.unwrap();

        let found = store.find_by_id(&id).await.unwrap();
        assert_eq!(found.fields()["title"], json!("t"));
    }

    #[tokio::test]
    async fn test_find_all_returns_every_ticket() {
        let store = HashMapTicketStore::new();
        store
            .insert(Ticket::new(fields_from(json!({"title": "a"}))))
            .await
            .unwrap();
        store
            .insert(Ticket::new(fields_from(json!({"title": "b"}))))
            .await
            .unwrap();

        let scan = store.find_all().await.unwrap();
        assert_eq!(scan.tickets.len(), 2);
        assert_eq!(scan.skipped_malformed, 0);
    }

    #[tokio::test]
    async fn test_update_fields_reports_matched_count() {
        let store = HashMapTicketStore::new();
        let ticket = Ticket::new(fields_from(json!({"status": "open", "title": "t"})));
        let id = ticket.id();
        store.insert(ticket).await.unwrap();

        let matched = store
            .update_fields(&id, &fields_from(json!({"status": "closed"})))
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let updated = store.find_by_id(&id).await.unwrap();
        assert_eq!(updated.fields()["status"], json!("closed"));
        assert_eq!(updated.fields()["title"], json!("t"));

        let unmatched = store
            .update_fields(&TicketId::new(), &Map::new())
            .await
            .unwrap();
        assert_eq!(unmatched, 0);
    }

    #[tokio::test]
    async fn test_delete_reports_matched_count() {
        let store = HashMapTicketStore::new();
        let ticket = Ticket::new(Map::new());
        let id = ticket.id();
        store.insert(ticket).await.unwrap();

        assert_eq!(store.delete(&id).await.unwrap(), 1);
        assert_eq!(store.delete(&id).await.unwrap(), 0);
        assert!(matches!(
            store.find_by_id(&id).await,
            Err(TicketStoreError::TicketNotFound)
        ));
    }
}
