//! Client configuration

use shared::{Layer, RoutingProfile};

/// Default backend URL when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client configuration for connecting to the access backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Layer the gateway routes to until changed with `ApiGateway::set_layer`
    pub layer: Layer,

    /// Token-to-endpoint mapping of the deployment
    pub routing: RoutingProfile,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            layer: Layer::default(),
            routing: RoutingProfile::default(),
            timeout: None,
        }
    }

    /// Set the initial layer
    pub fn with_layer(mut self, layer: impl Into<Layer>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Set the routing profile
    pub fn with_routing(mut self, routing: RoutingProfile) -> Self {
        self.routing = routing;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
