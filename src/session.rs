// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use tokio::sync::watch;
use tracing::info;

/// What readers see: the token and the login flag always change together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    #[serde(skip)]
    pub token: Option<String>,
    pub logged_in: bool,
}

/// In-memory authentication state.
///
/// Written only by the auth flow (and the transport layer on 401); read by
/// the request decorator and anything that subscribed. Persistence lives in
/// [`crate::store::TokenStore`].
#[derive(Debug)]
pub struct Session {
    tx: watch::Sender<SessionSnapshot>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::default());
        Self { tx }
    }

    /// Start from a previously persisted token.
    pub fn with_token(token: Option<&str>) -> Self {
        let session = Self::new();
        session.update(token);
        session
    }

    /// Replace the token. Blank tokens count as no token.
    pub fn update(&self, token: Option<&str>) {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        let next = SessionSnapshot {
            logged_in: token.is_some(),
            token,
        };
        let prev = self.tx.send_replace(next);
        if prev.logged_in != self.is_logged_in() {
            info!(logged_in = self.is_logged_in(), "session state changed");
        }
    }

    pub fn clear(&self) {
        self.update(None);
    }

    pub fn read(&self) -> Option<String> {
        self.tx.borrow().token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().logged_in
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Observe changes; the receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }
}
