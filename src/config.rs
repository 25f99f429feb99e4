// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
    /// Where the token store lives; platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: None,
        })
    }

    /// Global flags; clap already folded in the environment fallbacks.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let base = m
            .get_one::<String>("base_url")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BASE_URL);
        let secs = *m
            .get_one::<u64>("timeout")
            .unwrap_or(&DEFAULT_TIMEOUT_SECS);
        let mut cfg = Self::new(base)?;
        cfg.timeout = Duration::from_secs(secs);
        cfg.data_dir = m.get_one::<PathBuf>("data_dir").cloned();
        Ok(cfg)
    }
}

/// Paths are joined relative to the base, so it must end in '/'.
pub fn parse_base_url(s: &str) -> Result<Url> {
    let trimmed = s.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&normalized).with_context(|| format!("Invalid base URL '{}'", s))
}
