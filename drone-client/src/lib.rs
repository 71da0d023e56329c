//! Drone Client - API gateway for the drone access backend
//!
//! Resolves every call to an `on-chain`/`off-chain` or `layer-N` backend
//! path from the layer the gateway was configured with, performs one HTTP
//! round trip and returns typed data.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod layer_store;
pub mod ops;

pub use config::ClientConfig;
pub use error::{ClientResult, NetworkError};
pub use gateway::ApiGateway;
pub use http::{HttpClient, NetworkHttpClient};
pub use layer_store::{LayerSelector, LayerStore, StoreError};
pub use ops::{AccessOps, EntityOps};
pub use reqwest::StatusCode;

// Re-export shared types for convenience
pub use shared::{
    AccessRequest, AccessResponse, Attribute, Drone, Layer, Policy, Record, RoutingProfile,
};
