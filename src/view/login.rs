// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write as _};

use reqwest::StatusCode;
use tokio::task;

use crate::{
    api::{Identity, LoginRequest, Role},
    command::Context,
    error::{self, Error, Result},
    password::{self, Prompt as _},
    route::{CampSlug, ADMIN_DASHBOARD_PATH},
};

const MAX_ATTEMPTS: usize = 3;

pub(crate) async fn staff(ctx: &Context, camp: &CampSlug) -> Result<String> {
    println!("Staff sign-in for camp {camp}");
    let user = sign_in(ctx, Some(camp), None).await?;
    Ok(landing(&user, Some(camp)))
}

pub(crate) async fn admin(ctx: &Context) -> Result<String> {
    println!("Administrator sign-in");
    let user = sign_in(ctx, None, None).await?;
    Ok(landing(&user, None))
}

/// Where a fresh session lands when the navigation has nowhere else to
/// resume.
fn landing(user: &Identity, camp: Option<&CampSlug>) -> String {
    match (user.role, camp) {
        (Role::Admin, _) | (_, None) => ADMIN_DASHBOARD_PATH.to_owned(),
        (Role::Doctor, Some(slug)) => format!("/{slug}/doctor"),
        (Role::CampHead, Some(slug)) => format!("/{slug}/camp-head"),
    }
}

/// Prompts for credentials, exchanges them for a token, and binds the new
/// session to the camp the login page belongs to. A rejected password is
/// shown inline and asked again a few times; every other failure belongs to
/// the caller.
pub(crate) async fn sign_in(
    ctx: &Context,
    camp: Option<&CampSlug>,
    email: Option<String>,
) -> Result<Identity> {
    let email = match email {
        Some(email) => email,
        None => prompt_email().await?,
    };

    let mut request = password::Request::default();
    let mut attempt = 0_usize;
    loop {
        attempt += 1;
        let Some(pass) = ctx.prompts.prompt(request).await? else {
            return Err(error::Password::NoPrompt.into());
        };

        match ctx
            .http
            .execute(LoginRequest {
                email: email.clone(),
                password: pass,
                camp_slug: camp.cloned(),
            })
            .await
        {
            Ok(resp) => {
                let binding = resp
                    .user
                    .role
                    .is_tenant_scoped()
                    .then(|| camp.cloned())
                    .flatten();
                let user = resp.user.clone();
                ctx.http
                    .session()
                    .lock()
                    .await
                    .sign_in(resp.user, resp.token, binding)
                    .await;
                println!("Signed in as {} ({})", user.name, user.role);
                return Ok(user);
            }
            // A rejected login is the one 401 the interceptor leaves alone;
            // it stays on this page instead of redirecting.
            Err(Error::Api(error::Api::Rejected { status, message }))
                if status == StatusCode::UNAUTHORIZED && attempt < MAX_ATTEMPTS =>
            {
                request = password::RequestBuilder::new()
                    .with_error(&message)
                    .into_request();
            }
            Err(e) => return Err(e),
        }
    }
}

async fn prompt_email() -> Result<String> {
    task::spawn_blocking(|| {
        let mut line = String::new();
        print!("Email: ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }
        Ok(line.trim().to_owned())
    })
    .await?
}
