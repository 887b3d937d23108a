// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use futures_util::lock::Mutex;
use log::{debug, warn};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::{
    api::{Endpoint, ErrorBody},
    error::{self, Result},
    route, session,
};

/// Reacts to a server-reported session expiry: clears the stored session and
/// names the login entry point to send the user back through (the bound
/// camp's login page for tenant staff, the admin login otherwise). The bound
/// camp has to be read before the sign-out wipes it.
pub(crate) async fn expire_session(store: &mut session::Store) -> String {
    let login_path = route::login_path(store.bound_camp());
    store.sign_out().await;
    login_path
}

/// Uniform outbound request path. Attaches the bearer credential held by the
/// session store to every request and funnels authentication failures
/// through a single invalidation point; every other error status belongs to
/// the calling view.
#[derive(Clone)]
pub(crate) struct Client {
    inner: reqwest::Client,
    base: Url,
    session: Arc<Mutex<session::Store>>,
}

impl Client {
    pub(crate) fn new(base: Url, session: Arc<Mutex<session::Store>>) -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder().build()?,
            base,
            session,
        })
    }

    pub(crate) fn session(&self) -> &Arc<Mutex<session::Store>> {
        &self.session
    }

    pub(crate) async fn execute<E: Endpoint>(&self, req: E) -> Result<E::Response> {
        let url = self.base.join(&req.path())?;
        let token = self.session.lock().await.token();

        let mut builder = self.inner.request(E::METHOD, url.clone());
        if let Some(token) = &token {
            builder = builder.bearer_auth(token.expose());
        }
        if E::METHOD != Method::GET {
            builder = builder.json(&req);
        }

        debug!("{} {}", E::METHOD, url);
        let resp = builder.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED && !E::LOGIN {
            warn!("The server no longer accepts our credentials; clearing the stored session");
            let login_path = expire_session(&mut *self.session.lock().await).await;
            return Err(error::Api::SessionExpired { login_path }.into());
        }

        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("no further detail")
                    .to_owned(),
            };
            return Err(error::Api::Rejected { status, message }.into());
        }

        resp.json().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use uuid::uuid;

    use crate::{
        api::{Identity, ListCamps, LoginRequest, Role, Token},
        route::CampSlug,
        storage::Memory,
    };

    use super::*;

    fn staff(role: Role) -> Identity {
        Identity {
            id: uuid!("46640aca-1245-44d2-8ca9-d19750597d6c"),
            name: "Dr. Asha Rao".to_owned(),
            email: "asha@example.org".to_owned(),
            role,
            camp_id: Some(uuid!("0d0b28ba-9012-44ba-94e3-a2b7f2b62b16")),
        }
    }

    #[test]
    fn only_the_login_endpoint_is_exempt_from_the_interceptor() {
        assert!(LoginRequest::LOGIN);
        assert!(!ListCamps::LOGIN);
    }

    #[tokio::test]
    async fn expiry_on_a_tenant_session_clears_it_and_names_the_tenant_login() {
        let mirror = Memory::<session::Data>::new();
        let mut store = session::Store::new(Box::new(mirror.clone()));
        store.initialize().await;
        store
            .sign_in(
                staff(Role::Doctor),
                Token::from("tok123".to_owned()),
                Some(CampSlug::new("sunrise-camp")),
            )
            .await;

        let login_path = expire_session(&mut store).await;

        assert_eq!(login_path, "/sunrise-camp/login");
        assert!(!store.is_authenticated());
        assert!(Memory::snapshot(&mirror).await.is_none());
    }

    #[tokio::test]
    async fn expiry_on_an_admin_session_names_the_admin_login() {
        let mut store = session::Store::new(Box::new(Memory::<session::Data>::new()));
        store.initialize().await;
        store
            .sign_in(
                Identity {
                    role: Role::Admin,
                    camp_id: None,
                    ..staff(Role::Admin)
                },
                Token::from("tok456".to_owned()),
                None,
            )
            .await;

        let login_path = expire_session(&mut store).await;

        assert_eq!(login_path, "/admin/login");
        assert!(!store.is_authenticated());
    }
}
