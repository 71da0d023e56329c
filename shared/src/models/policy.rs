//! Policy Model

use serde::{Deserialize, Serialize};

use super::Record;
use crate::routing::Resource;
use crate::util::deserialize_optional_id;

/// Allowed time window for a zone. Evaluated by the backend only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub zone: i32,
    pub start_time: String,
    pub end_time: String,
}

/// Create/update policy payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyInput {
    pub zone: i32,
    pub start_time: String,
    pub end_time: String,
}

impl Policy {
    pub fn new(zone: i32, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: None,
            zone,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

impl Record for Policy {
    type Payload = PolicyInput;
    const RESOURCE: Resource = Resource::Policy;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn payload(&self) -> PolicyInput {
        PolicyInput {
            zone: self.zone,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}
