// Widget kind classification
use super::keys::extract_keys;
use super::probe;
use crate::domain::widget::WidgetKind;
use serde_json::Value;

/// Lower-cased hints a widget carries about what it displays.
struct Hints {
    type_alias: String,
    title: String,
}

impl Hints {
    fn from_widget(widget: &Value) -> Self {
        let type_alias = probe::first_set([
            probe::field(widget, "typeAlias"),
            probe::field(widget, "type"),
            probe::path(widget, &["config", "type"]),
        ]);
        let title = probe::first_set([probe::path(widget, &["config", "title"]), probe::field(widget, "title")]);

        Self {
            type_alias: lowered(type_alias),
            title: lowered(title),
        }
    }
}

fn lowered(value: Option<&Value>) -> String {
    value.and_then(probe::text).unwrap_or_default().to_lowercase()
}

/// Classify a widget. Rules are checked in order and the first match wins:
/// chart hints, then value hints, then the number of keys.
pub fn classify(widget: &Value) -> WidgetKind {
    let hints = Hints::from_widget(widget);

    if hints.type_alias.contains("timeseries") || hints.type_alias.contains("chart") || hints.title.contains("chart") {
        return WidgetKind::Timeseries;
    }
    if hints.type_alias.contains("latest") || hints.type_alias.contains("value") || hints.title.contains("value") {
        return WidgetKind::SingleValue;
    }

    match extract_keys(widget).len() {
        0 => WidgetKind::Unknown,
        1 => WidgetKind::SingleValue,
        _ => WidgetKind::Timeseries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_keys(n: usize) -> Value {
        let keys: Vec<Value> = (0..n).map(|i| json!({"name": format!("k{i}")})).collect();
        json!({"config": {"datasources": [{"dataKeys": keys}]}})
    }

    #[test]
    fn test_type_alias_beats_title() {
        let widget = json!({"typeAlias": "basic_line_chart", "config": {"title": "Current value"}});
        assert_eq!(classify(&widget), WidgetKind::Timeseries);
    }

    #[test]
    fn test_chart_title_beats_value_type() {
        let widget = json!({"typeAlias": "simple_value_card", "config": {"title": "Pressure chart"}});
        assert_eq!(classify(&widget), WidgetKind::Timeseries);
    }

    #[test]
    fn test_value_hints() {
        assert_eq!(classify(&json!({"type": "latest"})), WidgetKind::SingleValue);
        assert_eq!(classify(&json!({"config": {"type": "Value_Card"}})), WidgetKind::SingleValue);
        assert_eq!(classify(&json!({"title": "Last VALUE"})), WidgetKind::SingleValue);
    }

    #[test]
    fn test_timeseries_type() {
        assert_eq!(classify(&json!({"type": "timeseries"})), WidgetKind::Timeseries);
    }

    #[test]
    fn test_key_count_fallback() {
        assert_eq!(classify(&with_keys(2)), WidgetKind::Timeseries);
        assert_eq!(classify(&with_keys(1)), WidgetKind::SingleValue);
        assert_eq!(classify(&with_keys(0)), WidgetKind::Unknown);
        assert_eq!(classify(&json!({})), WidgetKind::Unknown);
    }

    #[test]
    fn test_unrelated_hints_fall_through_to_keys() {
        let mut widget = with_keys(3);
        widget["typeAlias"] = json!("rpc_button");
        widget["config"]["title"] = json!("Controls");
        assert_eq!(classify(&widget), WidgetKind::Timeseries);
    }

    #[test]
    fn test_mistyped_hints_do_not_panic() {
        let widget = json!({"typeAlias": {"nested": true}, "type": 7, "config": {"title": ["chart"]}});
        assert_eq!(classify(&widget), WidgetKind::Unknown);
    }
}
