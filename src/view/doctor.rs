// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    api::{ListMyPatients, ListVisitors},
    command::Context,
    error::Result,
    route::CampSlug,
};

/// The doctor console: the camp's visitor queue, unseen visitors first.
pub(crate) async fn console(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let mut visitors = ctx.http.execute(ListVisitors { camp: camp.clone() }).await?;
    visitors.sort_by_key(|v| (v.consulted, v.token_number));

    println!("Visitor queue for camp {camp}");
    if visitors.is_empty() {
        println!("No visitors have registered yet.");
    } else {
        println!("{}", super::table(&visitors));
    }
    Ok(())
}

/// The consultations this doctor has recorded at this camp.
pub(crate) async fn my_patients(ctx: &Context, camp: &CampSlug) -> Result<()> {
    let consultations = ctx
        .http
        .execute(ListMyPatients { camp: camp.clone() })
        .await?;

    println!("Your patients at camp {camp}");
    if consultations.is_empty() {
        println!("You have not recorded any consultations yet.");
    } else {
        println!("{}", super::table(&consultations));
    }
    Ok(())
}
