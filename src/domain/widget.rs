// Normalized widget model
use super::entity::EntityRef;
use super::timewindow::Timewindow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    SingleValue,
    Timeseries,
    Unknown,
}

/// One widget after interpretation.
///
/// `entity` is `None` when the widget has no usable data source. That is not
/// an error: the widget is displayed but never fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedWidget {
    pub id: String,
    pub title: String,
    pub kind: WidgetKind,
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
    pub timewindow: Timewindow,
    #[serde(skip)]
    pub raw: Value,
}

impl NormalizedWidget {
    pub fn has_data_source(&self) -> bool {
        self.entity.is_some()
    }
}

/// Renderer the display layer mounts for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RendererHandle {
    SingleValueRenderer,
    TimeSeriesRenderer,
}
