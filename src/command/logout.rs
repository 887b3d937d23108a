// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

/// Sign out and remove the stored session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        let mut store = ctx.http.session().lock().await;
        store.initialize().await;

        if store.is_authenticated() {
            store.sign_out().await;
            println!("Signed out.");
        } else {
            println!("You are not signed in.");
        }
        Ok(())
    }
}
