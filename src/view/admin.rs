// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    api::{Camp, GetAdminCamp, ListCamps},
    command::Context,
    error::Result,
    metadata,
};

/// The admin dashboard: every provisioned camp.
pub(crate) async fn dashboard(ctx: &Context) -> Result<()> {
    let camps = ctx.http.execute(ListCamps).await?;

    println!("Provisioned camps");
    if camps.is_empty() {
        println!(
            "No camps yet. Create one with: {} camps create --name <name> …",
            *metadata::CLIENT_NAME
        );
    } else {
        println!("{}", super::table(&camps));
        println!(
            "Manage one with: {} open /admin/camps/<id>/manage",
            *metadata::CLIENT_NAME
        );
    }
    Ok(())
}

/// The management page of one camp: its details plus live numbers.
pub(crate) async fn manage(ctx: &Context, id: &str) -> Result<()> {
    let detail = ctx
        .http
        .execute(GetAdminCamp { id: id.to_owned() })
        .await?;

    summarize(&detail.camp);
    println!("  Registered visitors: {}", detail.stats.visitors);
    println!("  Consulted:           {}", detail.stats.consulted);
    println!("  Doctors on roster:   {}", detail.stats.doctors);
    Ok(())
}

pub(crate) fn summarize(camp: &Camp) {
    println!("{} ({})", camp.name, camp.id);
    println!("  Slug:     {}", camp.slug);
    println!("  Location: {}", camp.location);
    println!("  Runs:     {} through {}", camp.start_date, camp.end_date);
    if let Some(description) = &camp.description {
        println!("  About:    {description}");
    }
}
