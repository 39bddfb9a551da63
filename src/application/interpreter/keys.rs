// Telemetry key extraction
use super::probe;
use serde_json::Value;

/// Key names declared by the first datasource, in declaration order.
/// Each entry uses `name`, then `label`, then `key`; entries without a usable
/// string are skipped.
pub fn extract_keys(widget: &Value) -> Vec<String> {
    let Some(data_keys) = probe::first_datasource(widget)
        .and_then(|ds| probe::field(ds, "dataKeys"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    data_keys
        .iter()
        .filter_map(|entry| {
            probe::first_set([
                probe::field(entry, "name"),
                probe::field(entry, "label"),
                probe::field(entry, "key"),
            ])
        })
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
