use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Invalid ticket id: {0}")]
    InvalidId(String),
}

/// Opaque ticket identifier. Always server-generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a path segment into a ticket id. Fails fast on malformed input
    /// so handlers can reject it before any store access.
    pub fn parse(input: &str) -> Result<Self, TicketError> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| TicketError::InvalidId(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TicketId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A ticket: a server-assigned identifier plus an opaque document payload.
///
/// The payload is stored as-is; the only rule imposed on it is that it can
/// never carry an `id` field, which belongs to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Ticket {
    /// Create a ticket from a client payload, assigning a fresh identifier.
    /// Any client-supplied `id` field is discarded.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self {
            id: TicketId::new(),
            fields,
        }
    }

    /// Rehydrate a ticket from stored fields.
    pub fn parse(id: TicketId, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Field-level overwrite: every field present in `fields` replaces the
    /// stored field of the same name; absent fields survive untouched. This
    /// is a shallow merge - nested structures are replaced wholesale.
    pub fn overwrite_fields(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            if key == "id" {
                continue;
            }
            self.fields.insert(key.clone(), value.clone());
        }
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

    #[test]
    fn test_new_ticket_discards_client_supplied_id() {
        let ticket = Ticket::new(fields_from(json!({
            "id": "client-chosen",
            "title": "Broken printer",
        })));
        assert!(!ticket.fields().contains_key("id"));
        assert_ne!(ticket.id().to_string(), "client-chosen");
    }

    #[test]
    fn test_overwrite_fields_is_shallow() {
        let mut ticket = Ticket::new(fields_from(json!({
            "title": "Broken printer",
            "status": "open",
            "meta": {"floor": 2, "room": "B"},
        })));

        ticket.overwrite_fields(&fields_from(json!({
            "status": "closed",
            "meta": {"floor": 3},
        })));

        assert_eq!(ticket.fields()["title"], json!("Broken printer"));
        assert_eq!(ticket.fields()["status"], json!("closed"));
        // Nested structures are replaced wholesale, not deep-merged.
        assert_eq!(ticket.fields()["meta"], json!({"floor": 3}));
    }

    #[test]
    fn test_overwrite_fields_never_touches_id() {
        let mut ticket = Ticket::new(fields_from(json!({"title": "t"})));
        let id = ticket.id();
        ticket.overwrite_fields(&fields_from(json!({"id": "hijack"})));
        assert_eq!(ticket.id(), id);
        assert!(!ticket.fields().contains_key("id"));
    }

    #[test]
    fn test_malformed_id_fails_to_parse() {
        assert!(matches!(
            TicketId::parse("not-a-uuid"),
            Err(TicketError::InvalidId(_))
        ));
    }

    #[test]
    fn test_ticket_serializes_with_flattened_fields() {
        let ticket = Ticket::new(fields_from(json!({"title": "t"})));
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["title"], json!("t"));
        assert_eq!(value["id"], json!(ticket.id().to_string()));
    }
}
