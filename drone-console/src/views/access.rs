//! End-User view
//!
//! Pick a zone from the "Zone" attribute, load the drones in it, split them
//! into a requesting slot and a target slot by model type, then ask the
//! layer's access endpoint whether the requesting drone may enter the zone.

use chrono::{DateTime, Utc};
use drone_client::AccessOps;
use shared::{AccessRequest, AccessResponse, Drone};

use super::ViewError;

/// Model types filling the two role slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePair {
    pub requesting: String,
    pub target: String,
}

impl RolePair {
    pub fn new(requesting: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            requesting: requesting.into(),
            target: target.into(),
        }
    }

    /// Small drones requesting, Terminal drones as target
    pub fn legacy() -> Self {
        Self::new("Small", "Terminal")
    }

    pub fn model(&self, role: Role) -> &str {
        match role {
            Role::Requesting => &self.requesting,
            Role::Target => &self.target,
        }
    }
}

impl Default for RolePair {
    fn default() -> Self {
        Self::new("Terminal", "Edge")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Requesting,
    Target,
}

/// Last decision shown on the page
#[derive(Debug, Clone, PartialEq)]
pub struct AccessOutcome {
    pub response: AccessResponse,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AccessView {
    roles: RolePair,
    zones: Vec<String>,
    zone: Option<i32>,
    drones: Vec<Drone>,
    requesting: Option<usize>,
    target: Option<usize>,
    outcome: Option<AccessOutcome>,
    sending: bool,
}

impl AccessView {
    pub fn new(roles: RolePair) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    pub fn roles(&self) -> &RolePair {
        &self.roles
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn selected_zone(&self) -> Option<i32> {
        self.zone
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn selected(&self, role: Role) -> Option<&Drone> {
        let slot = match role {
            Role::Requesting => self.requesting,
            Role::Target => self.target,
        };
        slot.and_then(|i| self.drones.get(i))
    }

    /// Drones in the current zone eligible for a slot
    pub fn candidates(&self, role: Role) -> impl Iterator<Item = &Drone> {
        let model = self.roles.model(role).to_string();
        self.drones.iter().filter(move |d| d.is_model(&model))
    }

    /// Slot text: the drone's id, or a placeholder when empty
    pub fn describe(&self, role: Role) -> String {
        match self.selected(role) {
            Some(drone) => drone.id.clone().unwrap_or_default(),
            None => format!("No {} drone selected", self.roles.model(role)),
        }
    }

    pub fn outcome(&self) -> Option<&AccessOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub async fn load_zones<O>(&mut self, ops: &O) -> Result<(), ViewError>
    where
        O: AccessOps + ?Sized,
    {
        match ops.zone_values().await {
            Ok(zones) => {
                self.zones = zones;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching zones");
                Err(e.into())
            }
        }
    }

    /// Select a zone and reload its drones; each slot defaults to the first
    /// drone of its model type.
    pub async fn select_zone<O>(&mut self, ops: &O, zone: &str) -> Result<(), ViewError>
    where
        O: AccessOps + ?Sized,
    {
        let zone: i32 = zone
            .trim()
            .parse()
            .map_err(|_| ViewError::InvalidZone(zone.to_string()))?;

        match ops.drones_by_zone(zone).await {
            Ok(drones) => {
                self.zone = Some(zone);
                self.drones = drones;
                self.requesting = self.first_of(Role::Requesting);
                self.target = self.first_of(Role::Target);
                tracing::debug!(
                    zone,
                    drones = self.drones.len(),
                    requesting = ?self.requesting,
                    target = ?self.target,
                    "zone drones loaded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(zone, error = %e, "Error fetching drones");
                Err(e.into())
            }
        }
    }

    /// Pick a drone for one slot; the other slot is unaffected
    pub fn select(&mut self, role: Role, drone_id: &str) -> Result<(), ViewError> {
        let model = self.roles.model(role);
        let index = self
            .drones
            .iter()
            .position(|d| d.id.as_deref() == Some(drone_id) && d.is_model(model))
            .ok_or_else(|| ViewError::NotFound {
                resource: "Drone",
                id: drone_id.to_string(),
            })?;
        match role {
            Role::Requesting => self.requesting = Some(index),
            Role::Target => self.target = Some(index),
        }
        Ok(())
    }

    /// Submit the requesting drone's access request for the selected zone.
    ///
    /// Without a requesting drone nothing is sent and the previous outcome
    /// stays displayed; `Ok(None)` is returned.
    pub async fn send_request<O>(&mut self, ops: &O) -> Result<Option<&AccessOutcome>, ViewError>
    where
        O: AccessOps + ?Sized,
    {
        let (Some(drone), Some(zone)) = (self.selected(Role::Requesting), self.zone) else {
            tracing::warn!(role = %self.roles.requesting, "No requesting drone selected");
            return Ok(None);
        };
        let request = AccessRequest::new(drone.id.clone().unwrap_or_default(), zone);

        self.sending = true;
        let result = ops.send_access_request(&request).await;
        self.sending = false;

        match result {
            Ok(response) => {
                self.outcome = Some(AccessOutcome {
                    response,
                    received_at: Utc::now(),
                });
                Ok(self.outcome.as_ref())
            }
            Err(e) => {
                tracing::warn!(
                    entity_id = %request.entity_id,
                    zone,
                    error = %e,
                    "Error sending access request"
                );
                Err(e.into())
            }
        }
    }

    fn first_of(&self, role: Role) -> Option<usize> {
        let model = self.roles.model(role);
        self.drones.iter().position(|d| d.is_model(model))
    }
}
