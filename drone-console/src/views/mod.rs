//! View models
//!
//! Headless state behind the admin tables and the End-User page. Each view
//! owns its list privately and only talks to the backend through the
//! operation traits of `drone-client`.

pub mod access;
pub mod crud;

use drone_client::NetworkError;
use thiserror::Error;

pub use access::{AccessOutcome, AccessView, Role, RolePair};
pub use crud::{CrudView, Dialog, DialogMode};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid zone '{0}', expected a number")]
    InvalidZone(String),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("no dialog is open")]
    NoDialog,

    #[error(transparent)]
    Network(#[from] NetworkError),
}
