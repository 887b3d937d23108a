// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, route::CampSlug, view};

/// Sign in without opening a page first.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The camp whose staff account to sign in with; omit for service
    /// administrators.
    #[clap(long)]
    camp: Option<String>,

    /// The account email; prompted for when not given.
    #[clap(long)]
    email: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        ctx.http.session().lock().await.initialize().await;

        let camp = self.camp.map(CampSlug::new);
        _ = view::login::sign_in(&ctx, camp.as_ref(), self.email).await?;
        Ok(())
    }
}
