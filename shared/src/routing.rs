//! Layer-aware routing
//!
//! Maps a (resource, layer) pair to the backend path segment that serves it,
//! and a layer to the endpoint that evaluates access requests.
//!
//! ```text
//! {api_url}/{on-chain|off-chain}/getDrones
//! {api_url}/layer-{N}/accessRequest
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::layer::Layer;

/// Backend-managed resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Drone,
    Attribute,
    Policy,
}

impl Resource {
    pub fn singular(self) -> &'static str {
        match self {
            Resource::Drone => "Drone",
            Resource::Attribute => "Attribute",
            Resource::Policy => "Policy",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Resource::Drone => "Drones",
            Resource::Attribute => "Attributes",
            Resource::Policy => "Policies",
        }
    }

    /// `getDrones`, `getAttributes`, `getPolicies`
    pub fn list_op(self) -> String {
        format!("get{}", self.plural())
    }

    pub fn create_op(self) -> String {
        format!("create{}", self.singular())
    }

    pub fn update_op(self, id: &str) -> String {
        format!("update{}/{}", self.singular(), id)
    }

    pub fn remove_op(self, id: &str) -> String {
        format!("remove{}/{}", self.singular(), id)
    }
}

/// Backend tier a resource call is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    OnChain,
    OffChain,
}

impl Tier {
    pub fn segment(self) -> &'static str {
        match self {
            Tier::OnChain => "on-chain",
            Tier::OffChain => "off-chain",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Token-to-endpoint mapping in use by a deployment.
///
/// Deployments disagree on which tokens are high tier and how the four
/// access endpoints are numbered, so the mapping is chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingProfile {
    /// Access endpoints `layer-1`..`layer-4`; entity high tier is "4"
    #[default]
    Current,
    /// Access endpoints `layer-0`..`layer-3`; entity high tier is "3"
    Legacy,
}

impl RoutingProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingProfile::Current => "current",
            RoutingProfile::Legacy => "legacy",
        }
    }

    pub fn table(self) -> RoutingTable {
        match self {
            RoutingProfile::Current => RoutingTable {
                entity_high_tier: &["4"],
                policy_high_tier: &["3", "4"],
                access_tiers: ["1", "2", "3", "4"],
            },
            RoutingProfile::Legacy => RoutingTable {
                entity_high_tier: &["3"],
                policy_high_tier: &["2", "3"],
                access_tiers: ["0", "1", "2", "3"],
            },
        }
    }
}

impl fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown routing profile '{0}', expected 'current' or 'legacy'")]
pub struct ParseProfileError(String);

impl FromStr for RoutingProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(RoutingProfile::Current),
            "legacy" => Ok(RoutingProfile::Legacy),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}

/// Resolved routing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingTable {
    /// Tokens that send Drone and Attribute calls on-chain
    pub entity_high_tier: &'static [&'static str],
    /// Tokens that send Policy calls on-chain
    pub policy_high_tier: &'static [&'static str],
    /// Access endpoint tokens, lowest to highest
    pub access_tiers: [&'static str; 4],
}

impl RoutingTable {
    pub fn tier_for(&self, resource: Resource, layer: &Layer) -> Tier {
        let high = match resource {
            Resource::Drone | Resource::Attribute => self.entity_high_tier,
            Resource::Policy => self.policy_high_tier,
        };
        if layer.is_one_of(high) {
            Tier::OnChain
        } else {
            Tier::OffChain
        }
    }

    /// Path segment of the access endpoint, e.g. `layer-2`.
    ///
    /// Unrecognized tokens fall back to the highest tier.
    pub fn access_segment(&self, layer: &Layer) -> String {
        let token = self
            .access_tiers
            .iter()
            .find(|t| **t == layer.as_str())
            .unwrap_or(&self.access_tiers[3]);
        format!("layer-{token}")
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        RoutingProfile::default().table()
    }
}
