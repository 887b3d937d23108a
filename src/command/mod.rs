// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use log::error;

use crate::{
    error::{Error, Navigation, Result},
    gate, http, password,
    route::Route,
};

pub(crate) mod camps;
pub(crate) mod consult;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod open;
pub(crate) mod register;
pub(crate) mod whoami;

/// Everything a command needs: the HTTP adapter (which carries the session
/// store) and the password prompt chain.
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) http: http::Client,
    pub(crate) prompts: Arc<Vec<Box<dyn password::Prompt>>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: Context) -> Result<()>;
}

/// Runs a state-changing command through the same gate as a navigation to
/// the route it belongs to, so the permission matrix stays in one place.
pub(crate) async fn authorize(ctx: &Context, route: &Route) -> Result<()> {
    let mut store = ctx.http.session().lock().await;
    store.initialize().await;
    match gate::decide(&store, route) {
        gate::Decision::Allow => Ok(()),
        gate::Decision::Redirect(target) => {
            error!(
                r#"You are not signed in with an account that may do this; sign in at "{target}" first"#
            );
            Err(Error::Command)
        }
        gate::Decision::NotFound => Err(Error::Command),
        gate::Decision::Pending => Err(Navigation::NotInitialized.into()),
    }
}
