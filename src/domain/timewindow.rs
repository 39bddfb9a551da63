// Time window domain model
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKBACK_MS: i64 = 60 * 60 * 1000;
pub const DEFAULT_INTERVAL_MS: i64 = 60 * 1000;
pub const DEFAULT_LIMIT: u32 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregation {
    Min,
    Max,
    #[default]
    Avg,
    Sum,
    Count,
    None,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Min => "MIN",
            Aggregation::Max => "MAX",
            Aggregation::Avg => "AVG",
            Aggregation::Sum => "SUM",
            Aggregation::Count => "COUNT",
            Aggregation::None => "NONE",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Absolute query window in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timewindow {
    pub start_ts: i64,
    pub end_ts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "agg", skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,
}

impl Timewindow {
    /// Last hour ending at `end_ts`, one-minute buckets.
    pub fn last_hour(end_ts: i64) -> Self {
        Self {
            start_ts: end_ts - DEFAULT_LOOKBACK_MS,
            end_ts,
            interval: Some(DEFAULT_INTERVAL_MS),
            limit: Some(DEFAULT_LIMIT),
            aggregation: Some(Aggregation::Avg),
            order_by: Some(SortOrder::Asc),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start_ts < self.end_ts && self.limit.is_none_or(|l| l > 0)
    }

    pub fn aggregation_or_default(&self) -> Aggregation {
        self.aggregation.unwrap_or_default()
    }

    pub fn order_or_default(&self) -> SortOrder {
        self.order_by.unwrap_or_default()
    }
}
