//! `layer show | set | clear`

use shared::{Resource, Tier};
use std::io::Write;

use super::Context;
use crate::cli::LayerAction;

pub(super) fn run(
    ctx: &mut Context,
    action: LayerAction,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        LayerAction::Show => {}
        LayerAction::Set { layer } => {
            ctx.selector.set(layer.as_str())?;
            ctx.gateway.set_layer(layer);
        }
        LayerAction::Clear => {
            ctx.selector.clear()?;
            ctx.gateway.set_layer("");
        }
    }
    show(ctx, out)
}

fn show(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let layer = ctx.gateway.layer();
    let label = if layer.is_empty() {
        "(none)".to_string()
    } else {
        layer.label()
    };
    let tier = |resource: Resource| -> Tier { ctx.gateway.routing().tier_for(resource, layer) };

    writeln!(out, "Layer:              {label}")?;
    writeln!(out, "Drones/Attributes:  {}", tier(Resource::Drone))?;
    writeln!(out, "Policies:           {}", tier(Resource::Policy))?;
    writeln!(out, "Access endpoint:    {}", ctx.gateway.access_path())?;
    Ok(())
}
