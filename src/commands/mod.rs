// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod home;
pub mod reports;
pub mod transactions;

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::api::ApiClient;
use crate::cli;
use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;
use crate::store::TokenStore;

/// Everything a command needs: the transport (which carries the session)
/// and the durable token store.
pub struct App {
    pub api: ApiClient,
    pub store: TokenStore,
}

impl App {
    /// Primes the session from the saved token.
    pub fn new(config: &Config, store: TokenStore) -> Result<Self> {
        let session = Arc::new(Session::with_token(store.load_token()?.as_deref()));
        let api = ApiClient::new(config, session)?;
        Ok(App { api, store })
    }

    /// Passes `result` through, deleting the saved token when it carries
    /// `ApiError::SessionExpired`. The transport has already cleared the
    /// in-memory session by then.
    pub fn settle<T>(&self, result: Result<T>) -> Result<T> {
        let expired = result
            .as_ref()
            .err()
            .and_then(|e| e.downcast_ref::<ApiError>())
            .is_some_and(ApiError::is_session_expired);
        if expired {
            if let Err(e) = self.store.clear_token() {
                warn!(error = %e, "could not clear saved session");
            }
        }
        result
    }
}

/// Runs the subcommand in `matches`.
pub async fn dispatch(app: &App, matches: &clap::ArgMatches) -> Result<()> {
    let result = match matches.subcommand() {
        Some(("register", sub)) => auth::register(app, sub).await,
        Some(("login", sub)) => auth::login(app, sub).await,
        Some(("logout", _)) => auth::logout(app),
        Some(("status", _)) => auth::status(app),
        Some(("me", sub)) => auth::me(app, sub).await,
        Some(("home", sub)) => home::handle(app, sub).await,
        Some(("tx", sub)) => transactions::handle(app, sub).await,
        Some(("categories", sub)) => categories::handle(sub),
        Some(("report", sub)) => reports::handle(app, sub).await,
        _ => {
            cli::build_cli().print_help()?;
            println!();
            Ok(())
        }
    };
    app.settle(result)
}
