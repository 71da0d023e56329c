//! Data models
//!
//! Records managed through the admin views plus the transient access
//! request/response pair. Identifiers are assigned by the backend and travel
//! on the wire under the `ID` key.

pub mod access;
pub mod attribute;
pub mod drone;
pub mod policy;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::routing::Resource;

// Re-exports
pub use access::*;
pub use attribute::*;
pub use drone::*;
pub use policy::*;

/// A backend-managed record with create/update/delete endpoints.
///
/// `Default` yields the cleared form used when adding a new record.
pub trait Record: Clone + Default + DeserializeOwned + Send + Sync + 'static {
    /// Create/update body (the record without its identifier)
    type Payload: Serialize + Send + Sync;

    /// Which backend resource this record belongs to
    const RESOURCE: Resource;

    /// Backend-assigned identifier, `None` before the first create
    fn id(&self) -> Option<&str>;

    /// Build the create/update body
    fn payload(&self) -> Self::Payload;
}
