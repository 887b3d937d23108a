// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::debug;

use crate::{
    error::{Navigation, Result},
    gate::{self, Decision},
    route::{Access, Route},
    view,
};

/// Open a path of the hosted application, following the same redirects a
/// browser would.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to open, for example /sunrise-camp/doctor or
    /// /admin/dashboard.
    #[clap()]
    path: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        navigate(&ctx, self.path).await
    }
}

const MAX_HOPS: usize = 8;

/// One navigation: parse the path, let the gate decide, follow redirects,
/// and dispatch the allowed view. A login view reached through a denial
/// resumes toward the originally requested path after a successful sign-in.
pub(crate) async fn navigate(ctx: &super::Context, start: String) -> Result<()> {
    let mut path = start;
    let mut resume: Option<String> = None;

    for _ in 0..MAX_HOPS {
        let route = Route::parse(&path);

        let decision = {
            let mut store = ctx.http.session().lock().await;
            let mut decision = gate::decide(&store, &route);
            if decision == Decision::Pending {
                // The gate suspends until the one-time storage read is done.
                store.initialize().await;
                decision = gate::decide(&store, &route);
            }
            decision
        };

        match decision {
            Decision::Pending => return Err(Navigation::NotInitialized.into()),
            Decision::NotFound => {
                view::not_found::render(&path);
                return Ok(());
            }
            Decision::Redirect(target) => {
                debug!(r#"redirecting from "{path}" to "{target}""#);
                if route.access() != Access::Public && resume.is_none() {
                    resume = Some(path);
                }
                path = target;
            }
            Decision::Allow => match view::render(ctx, &route).await? {
                Some(next) => path = resume.take().unwrap_or(next),
                None => return Ok(()),
            },
        }
    }

    Err(Navigation::RedirectLoop {
        path,
        hops: MAX_HOPS,
    }
    .into())
}
