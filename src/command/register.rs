// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    api::{NewVisitor, RegisterVisitor},
    error::Result,
    route::{CampSlug, Route},
    view,
};

/// Register a visitor at a camp. Open to everyone, like the camp's public
/// registration page.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The camp to register at.
    #[clap(long)]
    camp: String,

    /// The visitor's full name.
    #[clap(long)]
    name: String,

    /// The visitor's age in years.
    #[clap(long)]
    age: u8,

    #[clap(long)]
    gender: Option<String>,

    /// A phone number the camp can reach the visitor on.
    #[clap(long)]
    phone: Option<String>,

    /// The complaints bringing the visitor in.
    #[clap(long)]
    symptoms: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        let camp = CampSlug::new(self.camp);
        super::authorize(&ctx, &Route::Registration { camp: camp.clone() }).await?;

        let visitor = ctx
            .http
            .execute(RegisterVisitor {
                camp: camp.clone(),
                registration: NewVisitor {
                    name: self.name,
                    age: self.age,
                    gender: self.gender,
                    phone: self.phone,
                    symptoms: self.symptoms,
                },
            })
            .await?;

        view::registration::confirm(&visitor, &camp);
        Ok(())
    }
}
