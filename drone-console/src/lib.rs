//! Drone Access Manager console
//!
//! Admin views for Drones, Attributes and Policies, the End-User access
//! request page, and the command-line front end that drives them.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod render;
pub mod views;

pub use cli::Cli;
