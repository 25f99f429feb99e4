// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;

const UA: &str = concat!("financefreedom/", env!("CARGO_PKG_VERSION"));

/// JSON-over-HTTP transport for the FinanceFreedom backend.
///
/// Adds the bearer header from the shared [`Session`] and ends that session
/// on any 401.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<Session>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(UA)
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(ApiError::transport)
    }

    /// Request without credentials (login, registration).
    pub fn anonymous(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.url(path)?))
    }

    /// Request carrying the current bearer token, if any.
    pub fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let req = self.anonymous(method, path)?;
        Ok(match self.session.read() {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    pub async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let req = req.build().map_err(ApiError::transport)?;
        debug!(method = %req.method(), url = %req.url(), "sending request");

        let resp = self.http.execute(req).await.map_err(ApiError::transport)?;
        let status = resp.status();
        debug!(status = status.as_u16(), "received response");

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend rejected credentials; ending session");
            self.session.clear();
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            let body = resp.text().await.ok();
            return Err(ApiError::from_response(status.as_u16(), body.as_deref()));
        }
        resp.json::<T>().await.map_err(ApiError::transport)
    }
}
