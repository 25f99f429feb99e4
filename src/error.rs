// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred.";
pub const EMPTY_TOKEN_MESSAGE: &str = "Server returned an empty token.";

static ERROR_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""error"\s*:\s*"([^"]*)""#).expect("static error-field pattern is valid")
});

/// Form problems caught before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Invalid amount '{0}'.")]
    InvalidAmount(String),
    #[error("Choose a category.")]
    MissingCategory,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: u16, body: Option<&str>) -> Self {
        if status == StatusCode::UNAUTHORIZED.as_u16() {
            return ApiError::SessionExpired;
        }
        ApiError::Backend {
            status,
            message: extract_message(status, body),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        let msg = err.to_string();
        if msg.trim().is_empty() {
            ApiError::Transport(UNEXPECTED_ERROR_MESSAGE.to_string())
        } else {
            ApiError::Transport(msg)
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

/// Human-readable message for a failed response.
///
/// 401 always yields [`SESSION_EXPIRED_MESSAGE`]; the caller is expected to
/// end the session. Otherwise a non-blank `error` string from the body wins,
/// and the fallback names the status code.
pub fn extract_message(status: u16, body: Option<&str>) -> String {
    if status == StatusCode::UNAUTHORIZED.as_u16() {
        return SESSION_EXPIRED_MESSAGE.to_string();
    }
    if let Some(msg) = body.and_then(backend_error_field) {
        return msg;
    }
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed");
    format!("HTTP {}: {}", status, reason)
}

fn backend_error_field(body: &str) -> Option<String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => v
            .as_object()
            .and_then(|obj| obj.get("error"))
            .and_then(|e| e.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        // Truncated or non-JSON bodies
        Err(_) => ERROR_FIELD
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
    }
}
