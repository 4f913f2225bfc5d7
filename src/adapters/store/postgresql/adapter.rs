//! PostgreSQL adapter implementing the store trait
//!
//! Applies each import batch inside a single transaction. Inserts use
//! `OVERRIDING SYSTEM VALUE` so the identity column accepts the
//! caller-supplied identifier; after the writes the identity sequence is
//! resynced so future auto-assigned identifiers cannot collide with imported
//! ones. Dropping the transaction without commit rolls everything back.

use crate::adapters::store::postgresql::client::PostgresClient;
use crate::adapters::store::traits::SubmissionStore;
use crate::domain::errors::StoreError;
use crate::domain::ids::SubmissionId;
use crate::domain::submission::SubmissionRecord;
use crate::domain::{PodiumError, Result};
use async_trait::async_trait;
use std::sync::Arc;

const INSERT_SQL: &str = r#"
    INSERT INTO submissions (
        id, team, project, category, event_date, score, member_count, captain
    )
    OVERRIDING SYSTEM VALUE
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

const UPDATE_SQL: &str = r#"
    UPDATE submissions SET
        team = $2,
        project = $3,
        category = $4,
        event_date = $5,
        score = $6,
        member_count = $7,
        captain = $8
    WHERE id = $1
"#;

// Keeps the identity sequence strictly ahead of every imported identifier.
const RESYNC_SEQUENCE_SQL: &str = r#"
    SELECT setval(
        pg_get_serial_sequence('submissions', 'id'),
        GREATEST((SELECT COALESCE(MAX(id), 0) FROM submissions), 1)
    )
"#;

/// PostgreSQL implementation of the submission store
pub struct PostgresStore {
    client: Arc<PostgresClient>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store adapter
    pub fn new(client: PostgresClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgresClient> {
        &self.client
    }
}

#[async_trait]
impl SubmissionStore for PostgresStore {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn load_all(&self) -> Result<Vec<SubmissionRecord>> {
        let client = self.client.get_connection().await?;

        let rows = client
            .query(
                "SELECT id, team, project, category, event_date, score, member_count, captain \
                 FROM submissions ORDER BY id",
                &[],
            )
            .await
            .map_err(|e| StoreError::SnapshotFailed(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");
            records.push(SubmissionRecord {
                id: SubmissionId::new(id).map_err(PodiumError::Other)?,
                team: row.get("team"),
                project: row.get("project"),
                category: row.get("category"),
                event_date: row.get("event_date"),
                score: row.get("score"),
                member_count: row.get("member_count"),
                captain: row.get("captain"),
            });
        }

        tracing::debug!(count = records.len(), "Loaded submission snapshot from PostgreSQL");

        Ok(records)
    }

    async fn apply_batch(
        &self,
        inserts: &[SubmissionRecord],
        updates: &[SubmissionRecord],
    ) -> Result<()> {
        let mut client = self.client.get_connection().await?;

        let tx = client
            .transaction()
            .await
            .map_err(|e| StoreError::TransactionFailed(format!("Failed to open: {e}")))?;

        for record in inserts {
            tx.execute(
                INSERT_SQL,
                &[
                    &record.id.get(),
                    &record.team,
                    &record.project,
                    &record.category,
                    &record.event_date,
                    &record.score,
                    &record.member_count,
                    &record.captain,
                ],
            )
            .await
            .map_err(|e| StoreError::InsertFailed {
                id: record.id.get(),
                message: e.to_string(),
            })?;
        }

        for record in updates {
            let affected = tx
                .execute(
                    UPDATE_SQL,
                    &[
                        &record.id.get(),
                        &record.team,
                        &record.project,
                        &record.category,
                        &record.event_date,
                        &record.score,
                        &record.member_count,
                        &record.captain,
                    ],
                )
                .await
                .map_err(|e| StoreError::UpdateFailed {
                    id: record.id.get(),
                    message: e.to_string(),
                })?;

            if affected != 1 {
                return Err(StoreError::UpdateFailed {
                    id: record.id.get(),
                    message: format!("expected 1 row, touched {affected}"),
                }
                .into());
            }
        }

        if !inserts.is_empty() {
            tx.execute(RESYNC_SEQUENCE_SQL, &[])
                .await
                .map_err(|e| StoreError::TransactionFailed(format!("Sequence resync: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(format!("Commit failed: {e}")))?;

        tracing::info!(
            inserts = inserts.len(),
            updates = updates.len(),
            "Batch committed to PostgreSQL"
        );

        Ok(())
    }

    fn preserves_identifiers(&self) -> bool {
        // Identity column accepts explicit values via OVERRIDING SYSTEM VALUE
        true
    }

    fn backend_name(&self) -> &str {
        "postgresql"
    }
}
