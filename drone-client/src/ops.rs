//! Operation traits consumed by the views
//!
//! The views only see these traits, so one generic CRUD view serves every
//! record type and tests can substitute in-memory backends.

use async_trait::async_trait;
use shared::{AccessRequest, AccessResponse, Drone, Record};

use crate::{ApiGateway, ClientResult, HttpClient};

/// CRUD operations for one record type
#[async_trait]
pub trait EntityOps<E: Record>: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<E>>;
    async fn create(&self, entity: &E) -> ClientResult<E>;
    async fn update(&self, entity: &E, id: &str) -> ClientResult<E>;
    async fn remove(&self, id: &str) -> ClientResult<()>;
}

/// Reads and the single write behind the End-User view
#[async_trait]
pub trait AccessOps: Send + Sync {
    /// Flattened values of the "Zone" attribute
    async fn zone_values(&self) -> ClientResult<Vec<String>>;
    async fn drones_by_zone(&self, zone: i32) -> ClientResult<Vec<Drone>>;
    async fn send_access_request(&self, request: &AccessRequest) -> ClientResult<AccessResponse>;
}

#[async_trait]
impl<C: HttpClient, E: Record> EntityOps<E> for ApiGateway<C> {
    async fn list(&self) -> ClientResult<Vec<E>> {
        self.list_records::<E>().await
    }

    async fn create(&self, entity: &E) -> ClientResult<E> {
        self.create_record(entity).await
    }

    async fn update(&self, entity: &E, id: &str) -> ClientResult<E> {
        self.update_record(entity, id).await
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.remove_record::<E>(id).await
    }
}

#[async_trait]
impl<C: HttpClient> AccessOps for ApiGateway<C> {
    async fn zone_values(&self) -> ClientResult<Vec<String>> {
        ApiGateway::zone_values(self).await
    }

    async fn drones_by_zone(&self, zone: i32) -> ClientResult<Vec<Drone>> {
        self.list_drones_by_zone(zone).await
    }

    async fn send_access_request(&self, request: &AccessRequest) -> ClientResult<AccessResponse> {
        self.submit_access_request(&request.entity_id, request.request_target)
            .await
    }
}
