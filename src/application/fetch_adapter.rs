// Telemetry fetch adapter - Request shaping for latest and series queries
use crate::application::telemetry_repository::{
    LatestQuery, SeriesQuery, TelemetryError, TelemetryRepository,
};
use crate::domain::entity::EntityRef;
use crate::domain::telemetry::{LatestValues, SeriesValues};
use crate::domain::timewindow::Timewindow;
use std::sync::Arc;

#[derive(Clone)]
pub struct TelemetryFetchAdapter {
    repository: Arc<dyn TelemetryRepository>,
}

impl TelemetryFetchAdapter {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_latest(&self, entity: &EntityRef, keys: &[String]) -> Result<LatestValues, TelemetryError> {
        let query = LatestQuery {
            entity: entity.clone(),
            keys: keys.join(","),
            use_strict_data_types: false,
        };

        let series = self.repository.latest_values(&query).await?;
        Ok(series
            .into_iter()
            .filter_map(|(key, points)| points.into_iter().next().map(|p| (key, p)))
            .collect())
    }

    pub async fn fetch_series(
        &self,
        entity: &EntityRef,
        keys: &[String],
        window: &Timewindow,
    ) -> Result<SeriesValues, TelemetryError> {
        let query = SeriesQuery {
            entity: entity.clone(),
            keys: keys.join(","),
            start_ts: window.start_ts,
            end_ts: window.end_ts,
            interval: window.interval,
            limit: window.limit,
            agg: window.aggregation_or_default(),
            order_by: window.order_or_default(),
            use_strict_data_types: false,
        };

        self.repository.time_series(&query).await
    }
}
