// Telemetry data domain models
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One sample as the backend reports it. Values are not coerced, so a
/// numeric reading may arrive as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub ts: i64,
    pub value: Value,
}

impl DataPoint {
    pub fn new(ts: i64, value: impl Into<Value>) -> Self {
        Self {
            ts,
            value: value.into(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match &self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Most recent sample per key.
pub type LatestValues = HashMap<String, DataPoint>;

/// Samples per key, in the order requested.
pub type SeriesValues = HashMap<String, Vec<DataPoint>>;
