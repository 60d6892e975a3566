use std::sync::Arc;

use sqlx::Error;
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::Reading;

/// Read-only access to the readings table. Ingestion happens out of band,
/// so there are no write paths here.
pub struct ReadingRepository {
    storage: Arc<Storage>,
}

impl ReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Get every reading recorded at or after the given time, oldest first.
    /// The full window is materialized; there is no cap on the result size.
    pub async fn find_since(&self, start_time: OffsetDateTime) -> Result<Vec<Reading>, Error> {
        let readings: Vec<Reading> = sqlx::query_as(
            r#"
            SELECT * FROM readings
            WHERE timestamp >= $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(start_time)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(readings)
    }
}
