//! API gateway
//!
//! Every call resolves its backend path from the layer the gateway holds at
//! the moment of the call. Changing the layer with [`ApiGateway::set_layer`]
//! retargets the next call; nothing in flight is affected.

use shared::models::ZONE_ATTRIBUTE;
use shared::{
    AccessRequest, AccessResponse, Attribute, Drone, Layer, Record, Resource, RoutingTable,
};

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Typed, layer-aware access to the backend
#[derive(Debug, Clone)]
pub struct ApiGateway<C = NetworkHttpClient> {
    http: C,
    layer: Layer,
    routing: RoutingTable,
}

impl ApiGateway<NetworkHttpClient> {
    /// Build a gateway over a network client
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        Ok(Self::with_client(http, config.layer.clone(), config.routing.table()))
    }
}

impl<C: HttpClient> ApiGateway<C> {
    pub fn with_client(http: C, layer: Layer, routing: RoutingTable) -> Self {
        Self {
            http,
            layer,
            routing,
        }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Switch the layer subsequent calls are routed by
    pub fn set_layer(&mut self, layer: impl Into<Layer>) {
        self.layer = layer.into();
        tracing::debug!(layer = %self.layer, "gateway layer changed");
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Relative path of a resource operation, e.g. `off-chain/getDrones`
    pub fn resource_path(&self, resource: Resource, op: &str) -> String {
        let tier = self.routing.tier_for(resource, &self.layer);
        format!("{}/{}", tier.segment(), op)
    }

    /// Relative path of the access endpoint, e.g. `layer-4/accessRequest`
    pub fn access_path(&self) -> String {
        format!("{}/accessRequest", self.routing.access_segment(&self.layer))
    }

    // ========== Records ==========

    /// Fetch every record; a `null` body is an empty list
    pub async fn list_records<E: Record>(&self) -> ClientResult<Vec<E>> {
        let path = self.resource_path(E::RESOURCE, &E::RESOURCE.list_op());
        let records: Option<Vec<E>> = self.http.get(&path).await?;
        Ok(records.unwrap_or_default())
    }

    /// Create a record; the returned copy carries the backend-assigned id
    pub async fn create_record<E: Record>(&self, entity: &E) -> ClientResult<E> {
        let path = self.resource_path(E::RESOURCE, &E::RESOURCE.create_op());
        let created: E = self.http.post(&path, &entity.payload()).await?;
        tracing::info!(
            resource = E::RESOURCE.singular(),
            id = ?created.id(),
            layer = %self.layer,
            "record created"
        );
        Ok(created)
    }

    pub async fn update_record<E: Record>(&self, entity: &E, id: &str) -> ClientResult<E> {
        let op = E::RESOURCE.update_op(&urlencoding::encode(id));
        let path = self.resource_path(E::RESOURCE, &op);
        let updated: E = self.http.put(&path, &entity.payload()).await?;
        tracing::info!(
            resource = E::RESOURCE.singular(),
            id,
            layer = %self.layer,
            "record updated"
        );
        Ok(updated)
    }

    pub async fn remove_record<E: Record>(&self, id: &str) -> ClientResult<()> {
        let op = E::RESOURCE.remove_op(&urlencoding::encode(id));
        let path = self.resource_path(E::RESOURCE, &op);
        self.http.delete(&path).await?;
        tracing::info!(
            resource = E::RESOURCE.singular(),
            id,
            layer = %self.layer,
            "record removed"
        );
        Ok(())
    }

    // ========== Lookups ==========

    pub async fn list_drones_by_zone(&self, zone: i32) -> ClientResult<Vec<Drone>> {
        let path = self.resource_path(Resource::Drone, &format!("getDronesByZone/{zone}"));
        let drones: Option<Vec<Drone>> = self.http.get(&path).await?;
        Ok(drones.unwrap_or_default())
    }

    pub async fn find_attributes_by_name(&self, name: &str) -> ClientResult<Vec<Attribute>> {
        let op = format!("getAttributeByName/{}", urlencoding::encode(name));
        let path = self.resource_path(Resource::Attribute, &op);
        let attributes: Option<Vec<Attribute>> = self.http.get(&path).await?;
        Ok(attributes.unwrap_or_default())
    }

    /// Values of the "Zone" attribute, flattened in order
    pub async fn zone_values(&self) -> ClientResult<Vec<String>> {
        let attributes = self.find_attributes_by_name(ZONE_ATTRIBUTE).await?;
        Ok(shared::models::flatten_values(&attributes))
    }

    // ========== Access ==========

    pub async fn submit_access_request(
        &self,
        entity_id: &str,
        request_target: i32,
    ) -> ClientResult<AccessResponse> {
        let request = AccessRequest::new(entity_id, request_target);
        let path = self.access_path();
        let response: AccessResponse = self.http.post(&path, &request).await?;
        tracing::info!(
            entity_id,
            request_target,
            endpoint = %path,
            granted = response.granted,
            "access request answered"
        );
        Ok(response)
    }
}
