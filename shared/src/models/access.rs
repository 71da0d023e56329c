//! Access request / response
//!
//! Transient, built per submission from the End-User view.

use serde::{Deserialize, Serialize};

/// Request for the drone `entity_id` to enter zone `request_target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub entity_id: String,
    pub request_target: i32,
}

impl AccessRequest {
    pub fn new(entity_id: impl Into<String>, request_target: i32) -> Self {
        Self {
            entity_id: entity_id.into(),
            request_target,
        }
    }
}

/// Backend decision for one access request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResponse {
    pub granted: bool,
    #[serde(default)]
    pub message: String,
}
