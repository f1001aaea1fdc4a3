use serde_json::{Map, Value};
use sqlx::{Pool, Postgres, Row};
use ticketera_core::{Ticket, TicketId, TicketScan, TicketStore, TicketStoreError};
use uuid::Uuid;

use crate::config::constants::STORE_TIMEOUT;

/// Ticket store over a JSONB column: the schema-flexible document side of
/// the system. The `id` lives in its own column; everything else is payload.
#[derive(Clone)]
pub struct PostgresTicketStore {
    pool: sqlx::PgPool,
}

impl PostgresTicketStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresTicketStore { pool }
    }
}

#[async_trait::async_trait]
impl TicketStore for PostgresTicketStore {
    #[tracing::instrument(name = "Inserting ticket into PostgreSQL", skip_all)]
    async fn insert(&self, ticket: Ticket) -> Result<(), TicketStoreError> {
        let id = ticket.id();
        let query = sqlx::query(
            r#"
                INSERT INTO tickets (id, payload)
                VALUES ($1, $2)
            "#,
        )
        .bind(id.as_uuid())
        .bind(sqlx::types::Json(ticket.fields()));

        tokio::time::timeout(STORE_TIMEOUT, query.execute(&self.pool))
            .await
            .map_err(|_| TicketStoreError::Timeout)?
            .map_err(|e| TicketStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Scanning tickets in PostgreSQL", skip_all)]
    async fn find_all(&self) -> Result<TicketScan, TicketStoreError> {
        let query = sqlx::query("SELECT id, payload FROM tickets");

        let rows = tokio::time::timeout(STORE_TIMEOUT, query.fetch_all(&self.pool))
            .await
            .map_err(|_| TicketStoreError::Timeout)?
            .map_err(|e| TicketStoreError::UnexpectedError(e.to_string()))?;

        let mut scan = TicketScan::default();
        for row in rows {
            match decode_ticket(&row) {
                Some(ticket) => scan.tickets.push(ticket),
                // A malformed record degrades the listing, never fails it.
                None => scan.skipped_malformed += 1,
            }
        }

        Ok(scan)
    }

    #[tracing::instrument(name = "Retrieving ticket from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &TicketId) -> Result<Ticket, TicketStoreError> {
        let query = sqlx::query("SELECT id, payload FROM tickets WHERE id = $1").bind(id.as_uuid());

        let row = tokio::time::timeout(STORE_TIMEOUT, query.fetch_optional(&self.pool))
            .await
            .map_err(|_| TicketStoreError::Timeout)?
            .map_err(|e| TicketStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(TicketStoreError::TicketNotFound);
        };

        decode_ticket(&row).ok_or_else(|| {
            TicketStoreError::UnexpectedError("Malformed ticket payload".to_string())
        })
    }

    #[tracing::instrument(name = "Updating ticket in PostgreSQL", skip_all)]
    async fn update_fields(
        &self,
        id: &TicketId,
        fields: &Map<String, Value>,
    ) -> Result<u64, TicketStoreError> {
        // JSONB concatenation replaces exactly the top-level fields present
        // in the right operand, which is the field-level overwrite contract.
        let query = sqlx::query(
            r#"
                UPDATE tickets
                SET payload = payload || $2
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(sqlx::types::Json(fields));

        let result = tokio::time::timeout(STORE_TIMEOUT, query.execute(&self.pool))
            .await
            .map_err(|_| TicketStoreError::Timeout)?
            .map_err(|e| TicketStoreError::UnexpectedError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Deleting ticket from PostgreSQL", skip_all)]
    async fn delete(&self, id: &TicketId) -> Result<u64, TicketStoreError> {
        let query = sqlx::query("DELETE FROM tickets WHERE id = $1").bind(id.as_uuid());

        let result = tokio::time::timeout(STORE_TIMEOUT, query.execute(&self.pool))
            .await
            .map_err(|_| TicketStoreError::Timeout)?
            .map_err(|e| TicketStoreError::UnexpectedError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

fn decode_ticket(row: &sqlx::postgres::PgRow) -> Option<Ticket> {
    let id: Uuid = row.try_get("id").ok()?;
    let payload: Value = row.try_get("payload").ok()?;

    match payload {
        Value::Object(fields) => Some(Ticket::parse(TicketId::from(id), fields)),
        _ => None,
    }
}
