//! End-User commands: `zones`, `request`

use std::io::Write;

use super::Context;
use crate::cli::RequestArgs;
use crate::render::outcome_line;
use crate::views::{AccessView, Role, RolePair};

pub(super) async fn zones(ctx: &mut Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut view = AccessView::default();
    view.load_zones(&ctx.gateway).await?;
    if ctx.json {
        writeln!(out, "{}", serde_json::to_string_pretty(view.zones())?)?;
    } else {
        for zone in view.zones() {
            writeln!(out, "Zone {zone}")?;
        }
    }
    Ok(())
}

pub(super) async fn request(
    ctx: &mut Context,
    args: RequestArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let roles = if args.legacy_roles {
        RolePair::legacy()
    } else {
        RolePair::default()
    };
    let mut view = AccessView::new(roles.clone());

    // The zone list only informs; an unlisted zone is still sent
    if view.load_zones(&ctx.gateway).await.is_ok()
        && !view.zones().iter().any(|z| z == args.zone.trim())
    {
        tracing::warn!(zone = %args.zone, "zone is not listed by the Zone attribute");
    }

    view.select_zone(&ctx.gateway, &args.zone).await?;
    if let Some(id) = &args.requester {
        view.select(Role::Requesting, id)?;
    }
    if let Some(id) = &args.target {
        view.select(Role::Target, id)?;
    }

    let layer = ctx.gateway.layer().label();
    if !layer.is_empty() {
        writeln!(out, "{layer}")?;
    }
    writeln!(out, "{} drone: {}", roles.requesting, view.describe(Role::Requesting))?;
    writeln!(out, "{} drone: {}", roles.target, view.describe(Role::Target))?;

    match view.send_request(&ctx.gateway).await? {
        Some(outcome) => writeln!(out, "{}", outcome_line(outcome))?,
        None => writeln!(out, "No {} drone selected, request not sent", roles.requesting)?,
    }
    Ok(())
}
