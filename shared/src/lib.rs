//! Shared types for the Drone Access Manager
//!
//! Entity shapes exchanged with the access backend, the layer token and the
//! routing table that maps a layer onto backend path segments. Nothing in
//! this crate performs I/O.

pub mod layer;
pub mod models;
pub mod routing;
pub mod util;

// Re-exports
pub use layer::Layer;
pub use models::{
    AccessRequest, AccessResponse, Attribute, AttributeInput, Drone, DroneInput, Policy,
    PolicyInput, Record,
};
pub use routing::{Resource, RoutingProfile, RoutingTable, Tier};
pub use serde::{Deserialize, Serialize};
