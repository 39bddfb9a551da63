// Entity resolution for a widget's first datasource
use super::probe;
use crate::domain::entity::EntityRef;
use serde_json::Value;

const SINGLE_ENTITY_FILTER: &str = "singleEntity";

/// Resolve the entity a widget reads from.
///
/// A direct `entityId` on the datasource wins over its alias. Aliases are
/// only followed when their filter pins a single fixed entity; list, type
/// and relation filters resolve to `None`.
pub fn resolve_entity(widget: &Value, configuration: &Value) -> Option<EntityRef> {
    let datasource = probe::first_datasource(widget)?;

    if let Some(entity) = probe::field(datasource, "entityId").and_then(entity_ref) {
        return Some(entity);
    }

    let alias_id = probe::non_empty_str(datasource, "entityAliasId")?;
    let alias = probe::field(configuration, "entityAliases").and_then(|aliases| probe::field(aliases, alias_id))?;
    let filter = probe::field(alias, "filter")?;

    match probe::field(filter, "type").and_then(Value::as_str) {
        None | Some(SINGLE_ENTITY_FILTER) => {}
        Some(other) => {
            tracing::debug!("Alias {} uses unsupported filter type {}", alias_id, other);
            return None;
        }
    }

    probe::field(filter, SINGLE_ENTITY_FILTER).and_then(entity_ref)
}

fn entity_ref(value: &Value) -> Option<EntityRef> {
    let entity_type = probe::non_empty_str(value, "entityType")?;
    let id = probe::non_empty_str(value, "id")?;
    Some(EntityRef::new(entity_type, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EntityType;
    use serde_json::json;

    fn aliases() -> Value {
        json!({
            "entityAliases": {
                "fixed": {
                    "alias": "Boiler",
                    "filter": {"type": "singleEntity", "singleEntity": {"entityType": "DEVICE", "id": "abc"}}
                },
                "untyped": {
                    "filter": {"singleEntity": {"entityType": "ASSET", "id": "site-9"}}
                },
                "byType": {
                    "filter": {"type": "entityType", "entityType": "DEVICE", "resolveMultiple": true}
                },
                "list": {
                    "filter": {"type": "entityList", "entityType": "DEVICE", "entityList": ["a", "b"]}
                },
                "broken": {
                    "filter": {"type": "singleEntity", "singleEntity": {"entityType": "DEVICE"}}
                }
            }
        })
    }

    fn widget_with(datasource: Value) -> Value {
        json!({"config": {"datasources": [datasource]}})
    }

    #[test]
    fn test_direct_entity_id() {
        let widget = widget_with(json!({"entityId": {"entityType": "DEVICE", "id": "dev-1"}}));
        assert_eq!(resolve_entity(&widget, &json!({})), Some(EntityRef::new("DEVICE", "dev-1")));
    }

    #[test]
    fn test_direct_entity_wins_over_alias() {
        let widget = widget_with(json!({
            "entityId": {"entityType": "DEVICE", "id": "dev-1"},
            "entityAliasId": "fixed"
        }));
        assert_eq!(resolve_entity(&widget, &aliases()), Some(EntityRef::new("DEVICE", "dev-1")));
    }

    #[test]
    fn test_incomplete_direct_entity_falls_through_to_alias() {
        let widget = widget_with(json!({"entityId": {"entityType": "DEVICE", "id": ""}, "entityAliasId": "fixed"}));
        assert_eq!(resolve_entity(&widget, &aliases()), Some(EntityRef::new("DEVICE", "abc")));
    }

    #[test]
    fn test_single_entity_alias() {
        let widget = widget_with(json!({"entityAliasId": "fixed"}));
        let entity = resolve_entity(&widget, &aliases()).unwrap();
        assert_eq!(entity.entity_type, EntityType::Device);
        assert_eq!(entity.id, "abc");

        let widget = widget_with(json!({"entityAliasId": "untyped"}));
        assert_eq!(resolve_entity(&widget, &aliases()), Some(EntityRef::new("ASSET", "site-9")));
    }

    #[test]
    fn test_dynamic_aliases_resolve_to_none() {
        for alias in ["byType", "list", "broken", "missing"] {
            let widget = widget_with(json!({"entityAliasId": alias}));
            assert_eq!(resolve_entity(&widget, &aliases()), None, "alias {alias}");
        }
    }

    #[test]
    fn test_missing_datasource_or_alias_table() {
        assert_eq!(resolve_entity(&json!({}), &aliases()), None);
        let widget = widget_with(json!({"entityAliasId": "fixed"}));
        assert_eq!(resolve_entity(&widget, &json!({})), None);
        assert_eq!(resolve_entity(&widget, &json!({"entityAliases": []})), None);
    }

    #[test]
    fn test_only_first_datasource_is_considered() {
        let widget = json!({"config": {"datasources": [
            {"type": "function"},
            {"entityId": {"entityType": "DEVICE", "id": "dev-2"}}
        ]}});
        assert_eq!(resolve_entity(&widget, &json!({})), None);
    }
}
