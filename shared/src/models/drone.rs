//! Drone Model

use serde::{Deserialize, Serialize};

use super::Record;
use crate::routing::Resource;
use crate::util::deserialize_optional_id;

/// Drone entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Free-text category, e.g. "Small", "Terminal", "Edge"
    pub model_type: String,
    pub zone: i32,
}

/// Create/update drone payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneInput {
    pub model_type: String,
    pub zone: i32,
}

impl Drone {
    pub fn new(model_type: impl Into<String>, zone: i32) -> Self {
        Self {
            id: None,
            model_type: model_type.into(),
            zone,
        }
    }

    /// Whether this drone fills a role slot of the given model type
    pub fn is_model(&self, model_type: &str) -> bool {
        self.model_type == model_type
    }
}

impl Record for Drone {
    type Payload = DroneInput;
    const RESOURCE: Resource = Resource::Drone;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn payload(&self) -> DroneInput {
        DroneInput {
            model_type: self.model_type.clone(),
            zone: self.zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_wire_shape() {
        let drone: Drone =
            serde_json::from_str(r#"{"ID": 7, "model_type": "Terminal", "zone": 2}"#).unwrap();
        assert_eq!(drone.id.as_deref(), Some("7"));
        assert_eq!(drone.model_type, "Terminal");
        assert_eq!(drone.zone, 2);

        let json = serde_json::to_value(&drone).unwrap();
        assert_eq!(json["ID"], "7");
    }

    #[test]
    fn test_payload_never_carries_id() {
        let mut drone = Drone::new("Edge", 1);
        drone.id = Some("d-1".to_string());
        let json = serde_json::to_value(drone.payload()).unwrap();
        assert!(json.get("ID").is_none());
        assert_eq!(json["model_type"], "Edge");
        assert_eq!(json["zone"], 1);
    }
}
