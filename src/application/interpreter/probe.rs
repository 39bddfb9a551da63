// Field probing over the untyped dashboard tree
//
// Every accessor tolerates missing, null and mis-typed fields by returning
// `None`; nothing here can fail.
use serde_json::Value;

/// Child field of an object. `null` counts as absent.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Nested field lookup, e.g. `path(widget, &["config", "title"])`.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| field(current, key))
}

/// Loose truthiness: empty strings, `false`, zero and `null` are all "unset"
/// in documents produced by the authoring tool.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First candidate that is set.
pub fn first_set<'a>(candidates: impl IntoIterator<Item = Option<&'a Value>>) -> Option<&'a Value> {
    candidates.into_iter().flatten().find(|v| is_set(v))
}

/// Text form of a scalar. Strings pass through, numbers and booleans are
/// rendered, containers yield `None`.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-empty string field.
pub fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// First datasource of a widget: `config.datasources[0]`, else the legacy
/// top-level `datasources[0]`. Any further datasources are ignored.
pub fn first_datasource(widget: &Value) -> Option<&Value> {
    first_set([
        path(widget, &["config", "datasources"]).and_then(|ds| ds.get(0)),
        field(widget, "datasources").and_then(|ds| ds.get(0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_tolerates_wrong_shapes() {
        let doc = json!({"a": {"b": 3}, "s": "text", "n": null});
        assert_eq!(path(&doc, &["a", "b"]), Some(&json!(3)));
        assert_eq!(path(&doc, &["s", "b"]), None);
        assert_eq!(path(&doc, &["n"]), None);
        assert_eq!(path(&json!([1, 2]), &["a"]), None);
    }

    #[test]
    fn test_is_set_matches_loose_truthiness() {
        assert!(!is_set(&json!("")));
        assert!(!is_set(&json!(0)));
        assert!(!is_set(&json!(false)));
        assert!(is_set(&json!("x")));
        assert!(is_set(&json!({})));
        assert!(is_set(&json!([])));
    }

    #[test]
    fn test_first_datasource_prefers_config() {
        let widget = json!({
            "config": {"datasources": [{"name": "inner"}]},
            "datasources": [{"name": "outer"}]
        });
        assert_eq!(first_datasource(&widget).unwrap()["name"], "inner");

        let legacy = json!({"config": {"datasources": []}, "datasources": [{"name": "outer"}]});
        assert_eq!(first_datasource(&legacy).unwrap()["name"], "outer");

        assert!(first_datasource(&json!({"config": {"datasources": "bogus"}})).is_none());
    }
}
