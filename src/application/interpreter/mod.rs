// Dashboard interpreter - Raw dashboard document to normalized model
pub mod entity;
pub mod keys;
pub mod kind;
pub mod probe;
pub mod timewindow;

use crate::domain::dashboard::NormalizedDashboard;
use crate::domain::widget::NormalizedWidget;
use serde_json::Value;
use std::sync::Arc;

pub use self::entity::resolve_entity;
pub use self::keys::extract_keys;
pub use self::kind::classify;
pub use self::timewindow::{ExplicitWindowParser, IgnoreExplicitWindow, TimewindowResolver};

const DEFAULT_DASHBOARD_TITLE: &str = "Dashboard";

/// Turns authoring-tool documents into [`NormalizedDashboard`]s.
///
/// Interpretation is total: a malformed widget degrades to `unknown` kind,
/// no keys and no entity instead of failing the dashboard.
#[derive(Clone, Default)]
pub struct DashboardInterpreter {
    timewindows: TimewindowResolver,
}

impl DashboardInterpreter {
    pub fn new(timewindows: TimewindowResolver) -> Self {
        Self { timewindows }
    }

    /// Interpret with time windows ending now.
    pub fn interpret(&self, document: impl Into<Arc<Value>>) -> NormalizedDashboard {
        self.interpret_at(document, chrono::Utc::now().timestamp_millis())
    }

    /// Interpret with time windows ending at `anchor_ms`. Same document and
    /// anchor always give equal results.
    pub fn interpret_at(&self, document: impl Into<Arc<Value>>, anchor_ms: i64) -> NormalizedDashboard {
        let document = document.into();
        let empty = Value::Null;
        let configuration = probe::field(&document, "configuration").unwrap_or(&empty);

        let widgets: Vec<NormalizedWidget> = widget_entries(configuration)
            .into_iter()
            .map(|(id, raw)| self.interpret_widget(id, raw, configuration, anchor_ms))
            .collect();

        tracing::debug!("Interpreted {} widgets", widgets.len());

        NormalizedDashboard::new(dashboard_id(&document), dashboard_title(&document), widgets, document)
    }

    fn interpret_widget(&self, id: String, raw: &Value, configuration: &Value, anchor_ms: i64) -> NormalizedWidget {
        let title = probe::first_set([probe::path(raw, &["config", "title"]), probe::field(raw, "title")])
            .and_then(probe::text)
            .unwrap_or_else(|| format!("Widget {}", id));

        let widget = NormalizedWidget {
            kind: classify(raw),
            keys: extract_keys(raw),
            entity: resolve_entity(raw, configuration),
            timewindow: self.timewindows.resolve(raw, configuration, anchor_ms),
            raw: raw.clone(),
            title,
            id,
        };

        if widget.entity.is_none() {
            tracing::debug!("Widget {} has no resolvable entity", widget.id);
        }

        widget
    }
}

/// Widget entries in document order. An array of widgets is keyed by index.
fn widget_entries(configuration: &Value) -> Vec<(String, &Value)> {
    match probe::field(configuration, "widgets") {
        Some(Value::Object(map)) => map.iter().map(|(id, w)| (id.clone(), w)).collect(),
        Some(Value::Array(list)) => list.iter().enumerate().map(|(i, w)| (i.to_string(), w)).collect(),
        _ => Vec::new(),
    }
}

/// Dashboard ids come either as `{"id": "..."}` or as a bare string.
fn dashboard_id(document: &Value) -> String {
    probe::path(document, &["id", "id"])
        .or_else(|| probe::field(document, "id"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn dashboard_title(document: &Value) -> String {
    probe::field(document, "title")
        .filter(|v| probe::is_set(v))
        .and_then(probe::text)
        .unwrap_or_else(|| DEFAULT_DASHBOARD_TITLE.to_string())
}

/// Interpret with the default resolvers, anchored at the current time.
pub fn interpret(document: impl Into<Arc<Value>>) -> NormalizedDashboard {
    DashboardInterpreter::default().interpret(document)
}
