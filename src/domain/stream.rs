// Progressive dashboard stream messages
use super::dashboard::NormalizedDashboard;
use super::telemetry::{LatestValues, SeriesValues};
use super::widget::RendererHandle;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSkeleton {
    pub id: String,
    pub renderer: RendererHandle,
}

/// First message of a stream: the interpreted dashboard plus the renderer
/// chosen for each widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSkeleton {
    pub dashboard: NormalizedDashboard,
    pub renderers: Vec<WidgetSkeleton>,
}

/// Why a widget will not receive data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum WidgetStatus {
    NoDataSource,
    NoKeys,
    Unsupported,
    FetchFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    Skeleton(DashboardSkeleton),
    #[serde(rename_all = "camelCase")]
    LatestUpdate {
        widget_id: String,
        values: LatestValues,
    },
    #[serde(rename_all = "camelCase")]
    SeriesUpdate {
        widget_id: String,
        series: SeriesValues,
    },
    #[serde(rename_all = "camelCase")]
    WidgetStatus {
        widget_id: String,
        #[serde(flatten)]
        status: WidgetStatus,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        total_widgets: usize,
        duration_ms: i64,
    },
}

impl StreamMessage {
    pub fn widget_id(&self) -> Option<&str> {
        match self {
            StreamMessage::LatestUpdate { widget_id, .. }
            | StreamMessage::SeriesUpdate { widget_id, .. }
            | StreamMessage::WidgetStatus { widget_id, .. } => Some(widget_id),
            _ => None,
        }
    }
}
