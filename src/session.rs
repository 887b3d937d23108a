// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    api::{Identity, Token},
    route::CampSlug,
    storage::Storage,
};

/// The persisted session document. The field names are the durable-storage
/// keys inherited from the hosted application: `authToken`, `authUser` and
/// `campSlug`. The document always carries the user and the token together,
/// and removing it removes all three keys at once. `campSlug` is present
/// only for tenant-scoped (doctor, camp-head) sessions.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Data {
    #[serde(rename = "authUser")]
    user: Identity,
    #[serde(rename = "authToken")]
    token: Token,
    #[serde(rename = "campSlug", default, skip_serializing_if = "Option::is_none")]
    camp: Option<CampSlug>,
}

/// Single source of truth for who is signed in and with what credential.
///
/// All mutation flows through `initialize`, `sign_in` and `sign_out`; every
/// other component reads through the accessors. Durable-storage trouble
/// never propagates out of this type: a session that cannot be read or
/// written degrades to an in-memory one.
pub(crate) struct Store {
    storage: Box<dyn Storage<Data>>,
    data: Option<Data>,
    initialized: bool,
}

impl Store {
    pub(crate) fn new(storage: Box<dyn Storage<Data>>) -> Self {
        Self {
            storage,
            data: None,
            initialized: false,
        }
    }

    /// The one-time read of the persisted session. Must complete before the
    /// first route decision. Subsequent calls are no-ops; a read or parse
    /// failure leaves an empty session rather than failing.
    pub(crate) async fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.data = match self.storage.get().await {
            Ok(data) => data,
            Err(e) => {
                warn!("We could not read the stored session, so you start signed out: {e}");
                None
            }
        };
        self.initialized = true;
    }

    /// Replaces the session wholesale. Rewriting the whole document is what
    /// drops a previously stored camp binding when an admin (tenant-less)
    /// session takes over.
    pub(crate) async fn sign_in(&mut self, user: Identity, token: Token, camp: Option<CampSlug>) {
        let data = Data { user, token, camp };
        if let Err(e) = self.storage.update(&data).await {
            warn!("We could not persist your session; it will last only for this invocation: {e}");
        }
        self.data = Some(data);
        self.initialized = true;
    }

    /// Clears the session. The store stays initialized: it is known to be
    /// empty, not unknown.
    pub(crate) async fn sign_out(&mut self) {
        self.data = None;
        if let Err(e) = self.storage.clear().await {
            warn!("We could not remove the stored session: {e}");
        }
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    pub(crate) fn user(&self) -> Option<&Identity> {
        self.data.as_ref().map(|data| &data.user)
    }

    pub(crate) fn token(&self) -> Option<Token> {
        self.data.as_ref().map(|data| data.token.clone())
    }

    pub(crate) fn bound_camp(&self) -> Option<&CampSlug> {
        self.data.as_ref().and_then(|data| data.camp.as_ref())
    }

    /// Whether the backing storage survives this invocation.
    pub(crate) fn is_persistent(&self) -> bool {
        self.storage.is_persistent()
    }
}
