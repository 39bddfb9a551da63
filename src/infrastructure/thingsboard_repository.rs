// ThingsBoard-style REST repository implementation
use crate::application::telemetry_repository::{
    LatestQuery, SeriesQuery, TelemetryError, TelemetryRepository,
};
use crate::domain::entity::EntityRef;
use crate::domain::telemetry::SeriesValues;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ThingsboardRepository {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ThingsboardRepository {
    pub fn new(base_url: String, token: String, timeout: Duration) -> Result<Self, TelemetryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn dashboard_url(&self, dashboard_id: &str) -> String {
        format!("{}/api/dashboard/{}", self.base_url, urlencoding::encode(dashboard_id))
    }

    fn timeseries_url(&self, entity: &EntityRef, params: &[(&str, String)]) -> String {
        let query = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}/api/plugins/telemetry/{}/{}/values/timeseries?{}",
            self.base_url,
            urlencoding::encode(entity.entity_type.as_str()),
            urlencoding::encode(&entity.id),
            query
        )
    }

    fn latest_url(&self, query: &LatestQuery) -> String {
        self.timeseries_url(
            &query.entity,
            &[
                ("keys", query.keys.clone()),
                ("useStrictDataTypes", query.use_strict_data_types.to_string()),
            ],
        )
    }

    fn series_url(&self, query: &SeriesQuery) -> String {
        let mut params = vec![
            ("keys", query.keys.clone()),
            ("startTs", query.start_ts.to_string()),
            ("endTs", query.end_ts.to_string()),
        ];
        if let Some(interval) = query.interval {
            params.push(("interval", interval.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        params.push(("agg", query.agg.as_str().to_string()));
        params.push(("orderBy", query.order_by.as_str().to_string()));
        params.push(("useStrictDataTypes", query.use_strict_data_types.to_string()));

        self.timeseries_url(&query.entity, &params)
    }

    async fn execute<T: DeserializeOwned>(&self, url: &str) -> Result<T, TelemetryError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("X-Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TelemetryError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TelemetryRepository for ThingsboardRepository {
    async fn get_dashboard(&self, dashboard_id: &str) -> Result<Value, TelemetryError> {
        self.execute(&self.dashboard_url(dashboard_id)).await
    }

    async fn latest_values(&self, query: &LatestQuery) -> Result<SeriesValues, TelemetryError> {
        self.execute(&self.latest_url(query)).await
    }

    async fn time_series(&self, query: &SeriesQuery) -> Result<SeriesValues, TelemetryError> {
        let series: SeriesValues = self.execute(&self.series_url(query)).await?;
        tracing::debug!(
            "Series for {}/{}: {} keys",
            query.entity.entity_type,
            query.entity.id,
            series.len()
        );
        Ok(series)
    }
}
