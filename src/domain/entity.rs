// Entity domain model
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of telemetry-bearing entity a widget can target.
///
/// Unknown type strings are carried through as `Other` so that a newer
/// authoring tool does not make resolution fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Device,
    Asset,
    EntityView,
    Customer,
    Tenant,
    User,
    Dashboard,
    Edge,
    Other(String),
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::Device => "DEVICE",
            EntityType::Asset => "ASSET",
            EntityType::EntityView => "ENTITY_VIEW",
            EntityType::Customer => "CUSTOMER",
            EntityType::Tenant => "TENANT",
            EntityType::User => "USER",
            EntityType::Dashboard => "DASHBOARD",
            EntityType::Edge => "EDGE",
            EntityType::Other(raw) => raw,
        }
    }
}

impl From<&str> for EntityType {
    fn from(value: &str) -> Self {
        match value {
            "DEVICE" => EntityType::Device,
            "ASSET" => EntityType::Asset,
            "ENTITY_VIEW" => EntityType::EntityView,
            "CUSTOMER" => EntityType::Customer,
            "TENANT" => EntityType::Tenant,
            "USER" => EntityType::User,
            "DASHBOARD" => EntityType::Dashboard,
            "EDGE" => EntityType::Edge,
            other => EntityType::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityType {
    fn from(value: String) -> Self {
        EntityType::from(value.as_str())
    }
}

impl From<EntityType> for String {
    fn from(value: EntityType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a single entity a widget reads telemetry from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub id: String,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<EntityType>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
