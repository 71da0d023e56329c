//! Command dispatch
//!
//! Each invocation opens the layer store, builds a gateway pinned to the
//! stored layer and runs one command against the matching view.

mod access;
mod admin;
mod layer;

use drone_client::{ApiGateway, ClientConfig, LayerSelector, LayerStore};
use std::io::Write;

use crate::cli::{Cli, Command};

/// Everything a command needs
pub struct Context {
    pub selector: LayerSelector,
    pub gateway: ApiGateway,
    pub json: bool,
}

impl Context {
    pub fn open(cli: &Cli) -> anyhow::Result<Self> {
        let store = LayerStore::open(&cli.data_dir)?;
        let selector = LayerSelector::load(store);

        let mut config = ClientConfig::new(&cli.api_url)
            .with_layer(selector.current().clone())
            .with_routing(cli.routing);
        if let Some(secs) = cli.timeout {
            config = config.with_timeout(secs);
        }
        let gateway = ApiGateway::new(&config)?;

        tracing::debug!(
            api_url = %cli.api_url,
            layer = %selector.current(),
            routing = %cli.routing,
            "console context ready"
        );
        Ok(Self {
            selector,
            gateway,
            json: cli.json,
        })
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = Context::open(&cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut ctx, cli.command, &mut out).await?;
    out.flush()?;
    Ok(())
}

pub async fn execute(
    ctx: &mut Context,
    command: Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Layer { action } => layer::run(ctx, action, out),
        Command::Drones { action } => admin::drones(ctx, action, out).await,
        Command::Attributes { action } => admin::attributes(ctx, action, out).await,
        Command::Policies { action } => admin::policies(ctx, action, out).await,
        Command::Zones => access::zones(ctx, out).await,
        Command::Request(args) => access::request(ctx, args, out).await,
    }
}
