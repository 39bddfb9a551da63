// Repository trait for the telemetry backend
use crate::domain::entity::EntityRef;
use crate::domain::telemetry::SeriesValues;
use crate::domain::timewindow::{Aggregation, SortOrder};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Backend failures. These reach the caller as-is; nothing retries.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("telemetry backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed telemetry response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// "Latest values" request for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestQuery {
    pub entity: EntityRef,
    /// Comma-joined key names.
    pub keys: String,
    pub use_strict_data_types: bool,
}

/// Historical series request for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesQuery {
    pub entity: EntityRef,
    pub keys: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub interval: Option<i64>,
    pub limit: Option<u32>,
    pub agg: Aggregation,
    pub order_by: SortOrder,
    pub use_strict_data_types: bool,
}

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Load a raw dashboard document by id
    async fn get_dashboard(&self, dashboard_id: &str) -> Result<Value, TelemetryError>;

    /// Most recent samples per key (one point per key is expected)
    async fn latest_values(&self, query: &LatestQuery) -> Result<SeriesValues, TelemetryError>;

    /// Samples per key within the query window
    async fn time_series(&self, query: &SeriesQuery) -> Result<SeriesValues, TelemetryError>;
}
