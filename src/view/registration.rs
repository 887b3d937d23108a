// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    api::{GetCamp, Visitor},
    command::Context,
    error::Result,
    metadata,
    route::CampSlug,
};

/// The public landing page of a camp: what it is, where it runs, and how to
/// register. Needs no session at all.
pub(crate) async fn render(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let info = ctx.http.execute(GetCamp { camp: camp.clone() }).await?;

    println!("{} ({})", info.name, info.location);
    println!("Runs {} through {}", info.start_date, info.end_date);
    if let Some(description) = &info.description {
        println!("{description}");
    }
    println!();
    println!(
        "Register a visitor with: {} register --camp {camp} --name <name> --age <age>",
        *metadata::CLIENT_NAME
    );
    Ok(())
}

/// Confirmation for a completed self-registration.
pub(crate) fn confirm(visitor: &Visitor, camp: &CampSlug) {
    println!(
        "Registered {} at camp {camp}. Queue number: {}",
        visitor.name, visitor.token_number
    );
    println!("Please keep the queue number; the doctor calls visitors by it.");
}
