// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

/// Show the current session without touching the network.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        let mut store = ctx.http.session().lock().await;
        store.initialize().await;

        match store.user() {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!("  Role: {}", user.role);
                match store.bound_camp() {
                    Some(camp) => println!("  Camp: {camp}"),
                    None => println!("  Camp: none (service-wide session)"),
                }
                if !store.is_persistent() {
                    println!("  This session lives in memory only and ends with this invocation.");
                }
            }
            None => println!("You are not signed in."),
        }
        Ok(())
    }
}
