use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// A single stored sensor reading. The sensor fields are optional: the
/// store is populated by external senders and a document may omit any of
/// them.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reading {
    pub id: i64,
    /// The time of the reading, RFC 3339 over the wire
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Relative humidity %
    pub humidity: Option<f64>,
    /// VOC index
    pub voc_index: Option<f64>,
    /// Raw VOC sensor value
    pub voc_raw: Option<f64>,
}

#[derive(Clone)]
pub struct ReadingTable;

impl Table for ReadingTable {
    fn name(&self) -> &'static str {
        "readings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS readings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TIMESTAMP NOT NULL,
                temperature REAL,
                humidity REAL,
                voc_index REAL,
                voc_raw REAL
            );
            CREATE INDEX IF NOT EXISTS readings_timestamp_idx ON readings (timestamp);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS readings;")
    }
}
