// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use reqwest::Method;
use tracing::info;

use crate::api::ApiClient;
use crate::error::{ApiError, ValidationError, EMPTY_TOKEN_MESSAGE};
use crate::models::{AuthRequest, AuthResponse, UserDto, UserProfile};
use crate::store::TokenStore;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Login, registration and profile lookups. Owns the token lifecycle:
/// successful auth writes the token to both the store and the session.
pub struct AuthRepository<'a> {
    api: &'a ApiClient,
    store: &'a TokenStore,
}

impl<'a> AuthRepository<'a> {
    pub fn new(api: &'a ApiClient, store: &'a TokenStore) -> Self {
        Self { api, store }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.authenticate("auth/register", email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.authenticate("auth/login", email, password).await
    }

    async fn authenticate(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ApiError> {
        validate_credentials(email, password)?;
        let email = email.trim();
        let req = self
            .api
            .anonymous(Method::POST, path)?
            .json(&AuthRequest { email, password });
        let resp: AuthResponse = self.api.send(req).await?;

        let token = resp.token.unwrap_or_default();
        if token.trim().is_empty() {
            return Err(ApiError::Transport(EMPTY_TOKEN_MESSAGE.to_string()));
        }
        self.store
            .save_token(&token)
            .map_err(|e| ApiError::transport(format!("Could not save session: {e:#}")))?;
        self.api.session().update(Some(token.as_str()));
        info!(endpoint = path, "authenticated");

        let user = resp.user.unwrap_or_default();
        Ok(UserProfile {
            id: user.id,
            email: user.email.unwrap_or_else(|| email.to_string()),
        })
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let req = self.api.authed(Method::GET, "auth/me")?;
        let user: UserDto = self.api.send(req).await?;
        Ok(UserProfile {
            id: user.id,
            email: user.email.unwrap_or_default(),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.session().is_logged_in()
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear_token()?;
        self.api.session().clear();
        info!("logged out");
        Ok(())
    }
}
