// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    api::{CreateCamp, UpdateCamp},
    error::Result,
    route::{CampSlug, Route},
    view,
};

/// Provision and edit camps. Administrators only.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    #[clap(subcommand)]
    operation: Operation,
}

#[derive(Debug, Subcommand)]
enum Operation {
    /// Create a new camp.
    Create(Create),
    /// Change details of an existing camp.
    Update(Update),
}

#[derive(Debug, Parser)]
struct Create {
    /// The camp's display name.
    #[clap(long)]
    name: String,

    /// The path segment the camp is reached under. Issued once; never
    /// changes.
    #[clap(long)]
    slug: String,

    #[clap(long)]
    location: String,

    /// First day of the camp, as YYYY-MM-DD.
    #[clap(long)]
    starts: NaiveDate,

    /// Last day of the camp, as YYYY-MM-DD.
    #[clap(long)]
    ends: NaiveDate,

    #[clap(long)]
    description: Option<String>,
}

#[derive(Debug, Parser)]
struct Update {
    /// The camp to change, by its server-issued id.
    #[clap()]
    id: String,

    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    location: Option<String>,

    /// First day of the camp, as YYYY-MM-DD.
    #[clap(long)]
    starts: Option<NaiveDate>,

    /// Last day of the camp, as YYYY-MM-DD.
    #[clap(long)]
    ends: Option<NaiveDate>,

    #[clap(long)]
    description: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        match self.operation {
            Operation::Create(args) => {
                super::authorize(&ctx, &Route::AdminDashboard).await?;

                let camp = ctx
                    .http
                    .execute(CreateCamp {
                        name: args.name,
                        slug: CampSlug::new(args.slug),
                        location: args.location,
                        start_date: args.starts,
                        end_date: args.ends,
                        description: args.description,
                    })
                    .await?;

                println!("Created camp:");
                view::admin::summarize(&camp);
                println!("Staff sign in at {}", camp.slug.login_path());
            }
            Operation::Update(args) => {
                super::authorize(
                    &ctx,
                    &Route::AdminCampManage {
                        id: args.id.clone(),
                    },
                )
                .await?;

                let camp = ctx
                    .http
                    .execute(UpdateCamp {
                        id: args.id,
                        name: args.name,
                        location: args.location,
                        start_date: args.starts,
                        end_date: args.ends,
                        description: args.description,
                    })
                    .await?;

                println!("Updated camp:");
                view::admin::summarize(&camp);
            }
        }
        Ok(())
    }
}
