// Time window resolution
use super::probe;
use crate::domain::timewindow::Timewindow;
use serde_json::Value;
use std::sync::Arc;

/// Hook for turning an explicit `timewindow` object into a query window.
/// Returning `None` keeps the default window.
pub trait ExplicitWindowParser: Send + Sync {
    fn parse(&self, raw: &Value, anchor_ms: i64) -> Option<Timewindow>;
}

/// Explicit windows are detected but not honored yet; dashboards always
/// query the last hour.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreExplicitWindow;

impl ExplicitWindowParser for IgnoreExplicitWindow {
    fn parse(&self, _raw: &Value, _anchor_ms: i64) -> Option<Timewindow> {
        None
    }
}

#[derive(Clone)]
pub struct TimewindowResolver {
    parser: Arc<dyn ExplicitWindowParser>,
}

impl Default for TimewindowResolver {
    fn default() -> Self {
        Self::new(Arc::new(IgnoreExplicitWindow))
    }
}

impl TimewindowResolver {
    pub fn new(parser: Arc<dyn ExplicitWindowParser>) -> Self {
        Self { parser }
    }

    pub fn resolve(&self, widget: &Value, configuration: &Value, anchor_ms: i64) -> Timewindow {
        let explicit = probe::first_set([
            probe::path(widget, &["config", "timewindow"]),
            probe::field(configuration, "timewindow"),
        ]);

        let Some(raw) = explicit else {
            return Timewindow::last_hour(anchor_ms);
        };

        tracing::debug!("Explicit timewindow found, falling back to default unless parsed");
        self.parser
            .parse(raw, anchor_ms)
            .filter(Timewindow::is_valid)
            .unwrap_or_else(|| Timewindow::last_hour(anchor_ms))
    }
}
