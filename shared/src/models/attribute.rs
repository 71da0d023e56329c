//! Attribute Model
//!
//! Admin-managed taxonomy. The attribute named [`ZONE_ATTRIBUTE`] also feeds
//! the zone list of the End-User view.

use serde::{Deserialize, Serialize};

use super::Record;
use crate::routing::Resource;
use crate::util::{deserialize_null_default, deserialize_optional_id};

/// Name of the attribute whose values list the selectable zones
pub const ZONE_ATTRIBUTE: &str = "Zone";

/// Attribute entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// e.g. "Zone", "Area"
    pub name: String,
    /// Ordered values
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub value: Vec<String>,
}

/// Create/update attribute payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInput {
    pub name: String,
    pub value: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Vec<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            value,
        }
    }

    /// Split comma-separated input into trimmed, non-empty values.
    pub fn parse_values(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Comma-joined form used when seeding an edit field
    pub fn joined_values(&self) -> String {
        self.value.join(", ")
    }
}

impl Record for Attribute {
    type Payload = AttributeInput;
    const RESOURCE: Resource = Resource::Attribute;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn payload(&self) -> AttributeInput {
        AttributeInput {
            name: self.name.clone(),
            value: self.value.clone(),
        }
    }
}

/// Concatenate the values of every attribute in order.
///
/// The backend may return several attributes for one name.
pub fn flatten_values(attributes: &[Attribute]) -> Vec<String> {
    attributes
        .iter()
        .flat_map(|a| a.value.iter().cloned())
        .collect()
}
