// Normalized dashboard model
use super::widget::NormalizedWidget;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDashboard {
    pub id: String,
    pub title: String,
    pub widgets: Vec<NormalizedWidget>,
    #[serde(skip)]
    pub raw: Arc<Value>,
}

impl NormalizedDashboard {
    pub fn new(id: String, title: String, widgets: Vec<NormalizedWidget>, raw: Arc<Value>) -> Self {
        Self {
            id,
            title,
            widgets,
            raw,
        }
    }

    pub fn widget(&self, id: &str) -> Option<&NormalizedWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }
}
