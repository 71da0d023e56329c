//! Admin commands: `drones`, `attributes`, `policies`

use serde::Serialize;
use shared::{Attribute, Drone, Policy, Record};
use std::io::Write;

use super::Context;
use crate::cli::{AttributeAction, DroneAction, PolicyAction};
use crate::render::{TableRow, table};
use crate::views::CrudView;

pub(super) async fn drones(
    ctx: &mut Context,
    action: DroneAction,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        DroneAction::List => list::<Drone>(ctx, out).await,
        DroneAction::Zone { zone } => {
            let drones = ctx.gateway.list_drones_by_zone(zone).await?;
            print_all(ctx, &drones, out)
        }
        DroneAction::Add { model, zone } => {
            add(ctx, out, |d: &mut Drone| {
                d.model_type = model;
                d.zone = zone;
            })
            .await
        }
        DroneAction::Edit { id, model, zone } => {
            edit(ctx, &id, out, |d: &mut Drone| {
                if let Some(model) = model {
                    d.model_type = model;
                }
                if let Some(zone) = zone {
                    d.zone = zone;
                }
            })
            .await
        }
        DroneAction::Remove { id } => remove::<Drone>(ctx, &id, out).await,
    }
}

pub(super) async fn attributes(
    ctx: &mut Context,
    action: AttributeAction,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        AttributeAction::List => list::<Attribute>(ctx, out).await,
        AttributeAction::Get { name } => {
            let attributes = ctx.gateway.find_attributes_by_name(&name).await?;
            print_all(ctx, &attributes, out)
        }
        AttributeAction::Add { name, values } => {
            add(ctx, out, |a: &mut Attribute| {
                a.name = name;
                a.value = Attribute::parse_values(&values);
            })
            .await
        }
        AttributeAction::Edit { id, name, values } => {
            edit(ctx, &id, out, |a: &mut Attribute| {
                if let Some(name) = name {
                    a.name = name;
                }
                if let Some(values) = values {
                    a.value = Attribute::parse_values(&values);
                }
            })
            .await
        }
        AttributeAction::Remove { id } => remove::<Attribute>(ctx, &id, out).await,
    }
}

pub(super) async fn policies(
    ctx: &mut Context,
    action: PolicyAction,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        PolicyAction::List => list::<Policy>(ctx, out).await,
        PolicyAction::Add { zone, start, end } => {
            add(ctx, out, |p: &mut Policy| {
                p.zone = zone;
                p.start_time = start;
                p.end_time = end;
            })
            .await
        }
        PolicyAction::Edit {
            id,
            zone,
            start,
            end,
        } => {
            edit(ctx, &id, out, |p: &mut Policy| {
                if let Some(zone) = zone {
                    p.zone = zone;
                }
                if let Some(start) = start {
                    p.start_time = start;
                }
                if let Some(end) = end {
                    p.end_time = end;
                }
            })
            .await
        }
        PolicyAction::Remove { id } => remove::<Policy>(ctx, &id, out).await,
    }
}

async fn list<E>(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()>
where
    E: Record + TableRow + Serialize,
{
    let mut view = CrudView::<E>::new();
    view.load(&ctx.gateway).await?;
    print_all(ctx, view.items(), out)
}

async fn add<E, F>(ctx: &Context, out: &mut dyn Write, fill: F) -> anyhow::Result<()>
where
    E: Record + TableRow + Serialize,
    F: FnOnce(&mut E),
{
    let mut view = CrudView::<E>::new();
    view.open_add();
    fill(view.draft_mut()?);
    let created = view.save(&ctx.gateway).await?;
    print_all(ctx, std::slice::from_ref(&created), out)
}

async fn edit<E, F>(ctx: &Context, id: &str, out: &mut dyn Write, apply: F) -> anyhow::Result<()>
where
    E: Record + TableRow + Serialize,
    F: FnOnce(&mut E),
{
    let mut view = CrudView::<E>::new();
    view.load(&ctx.gateway).await?;
    view.open_edit(id)?;
    apply(view.draft_mut()?);
    let updated = view.save(&ctx.gateway).await?;
    print_all(ctx, std::slice::from_ref(&updated), out)
}

async fn remove<E>(ctx: &Context, id: &str, out: &mut dyn Write) -> anyhow::Result<()>
where
    E: Record,
{
    let mut view = CrudView::<E>::new();
    view.delete(&ctx.gateway, id).await?;
    writeln!(out, "Removed {} {id}", E::RESOURCE.singular())?;
    Ok(())
}

fn print_all<E>(ctx: &Context, records: &[E], out: &mut dyn Write) -> anyhow::Result<()>
where
    E: TableRow + Serialize,
{
    if ctx.json {
        writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
    } else {
        writeln!(out, "{}", table(records))?;
    }
    Ok(())
}
