//! Command-line surface

use clap::{Args, Parser, Subcommand};
use drone_client::config::DEFAULT_API_URL;
use shared::RoutingProfile;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "drone-console", version, about = "Drone Access Manager")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "DRONE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory holding the persisted layer selection
    #[arg(long, env = "DRONE_DATA_DIR", default_value = "./.drone-access")]
    pub data_dir: PathBuf,

    /// Token-to-endpoint mapping: current | legacy
    #[arg(long, env = "DRONE_ROUTING", default_value = "current")]
    pub routing: RoutingProfile,

    /// Request timeout in seconds (unbounded when omitted)
    #[arg(long, env = "DRONE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, env = "DRONE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[arg(long)]
    pub log_json: bool,

    /// Also write daily-rotated logs to this directory
    #[arg(long, env = "DRONE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the selected layer
    Layer {
        #[command(subcommand)]
        action: LayerAction,
    },
    /// Manage drones
    Drones {
        #[command(subcommand)]
        action: DroneAction,
    },
    /// Manage attributes
    Attributes {
        #[command(subcommand)]
        action: AttributeAction,
    },
    /// Manage policies
    Policies {
        #[command(subcommand)]
        action: PolicyAction,
    },
    /// List selectable zones
    Zones,
    /// Send an access request from a drone in a zone
    Request(RequestArgs),
}

#[derive(Debug, Subcommand)]
pub enum LayerAction {
    Show,
    Set { layer: String },
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum DroneAction {
    List,
    /// Drones in one zone
    Zone { zone: i32 },
    Add {
        #[arg(long)]
        model: String,
        #[arg(long, allow_negative_numbers = true)]
        zone: i32,
    },
    Edit {
        id: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        zone: Option<i32>,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum AttributeAction {
    List,
    /// Attributes with this name
    Get { name: String },
    Add {
        #[arg(long)]
        name: String,
        /// Comma-separated values
        #[arg(long, default_value = "")]
        values: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        values: Option<String>,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum PolicyAction {
    List,
    Add {
        #[arg(long, allow_negative_numbers = true)]
        zone: i32,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    Edit {
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        zone: Option<i32>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Zone to request access to
    #[arg(long)]
    pub zone: String,

    /// Requesting drone id (defaults to the first of its model type)
    #[arg(long)]
    pub requester: Option<String>,

    /// Target drone id (defaults to the first of its model type)
    #[arg(long)]
    pub target: Option<String>,

    /// Use Small/Terminal roles instead of Terminal/Edge
    #[arg(long)]
    pub legacy_roles: bool,
}
