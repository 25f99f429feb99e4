// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.example", "FinanceFreedom", "financefreedom"));

pub const PREF_NAME: &str = "finance_freedom_prefs";
pub const KEY_ACCESS_TOKEN: &str = "access_token";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

pub fn store_path(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => data_dir()?,
    };
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir.join("financefreedom.sqlite"))
}

/// Durable home of the access token across runs.
pub struct TokenStore {
    conn: Connection,
}

impl TokenStore {
    pub fn open_or_init(dir: Option<&Path>) -> Result<Self> {
        let path = store_path(dir)?;
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open token store at {}", path.display()))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Open in-memory token store")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS preferences(
            pref_name TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY(pref_name, key)
        );
        "#,
        )?;
        Ok(Self { conn })
    }

    pub fn load_token(&self) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE pref_name=?1 AND key=?2",
                params![PREF_NAME, KEY_ACCESS_TOKEN],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v.filter(|t| !t.trim().is_empty()))
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        if token.trim().is_empty() {
            return self.clear_token();
        }
        self.conn.execute(
            "INSERT INTO preferences(pref_name, key, value) VALUES(?1, ?2, ?3)
             ON CONFLICT(pref_name, key) DO UPDATE SET value=excluded.value",
            params![PREF_NAME, KEY_ACCESS_TOKEN, token],
        )?;
        Ok(())
    }

    pub fn clear_token(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM preferences WHERE pref_name=?1 AND key=?2",
            params![PREF_NAME, KEY_ACCESS_TOKEN],
        )?;
        Ok(())
    }
}
