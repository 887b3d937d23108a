// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    api::{GetCampStats, ListDoctors, ListVisitors},
    command::Context,
    error::Result,
    route::CampSlug,
};

/// The camp-head console: the camp's headline numbers.
pub(crate) async fn console(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let stats = ctx
        .http
        .execute(GetCampStats { camp: camp.clone() })
        .await?;

    println!("Camp {camp}");
    println!("  Registered visitors: {}", stats.visitors);
    println!("  Consulted:           {}", stats.consulted);
    println!("  Still waiting:       {}", stats.waiting);
    println!("  Doctors on roster:   {}", stats.doctors);
    Ok(())
}

/// The camp's doctor roster with per-doctor consultation counts.
pub(crate) async fn doctors(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let doctors = ctx.http.execute(ListDoctors { camp: camp.clone() }).await?;

    println!("Doctors at camp {camp}");
    if doctors.is_empty() {
        println!("No doctors have been added to this camp yet.");
    } else {
        println!("{}", super::table(&doctors));
    }
    Ok(())
}

/// The full visitor roster, registration order.
pub(crate) async fn visitors(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let visitors = ctx.http.execute(ListVisitors { camp: camp.clone() }).await?;

    println!("Visitors at camp {camp}");
    if visitors.is_empty() {
        println!("No visitors have registered yet.");
    } else {
        println!("{}", super::table(&visitors));
    }
    Ok(())
}
