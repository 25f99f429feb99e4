// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use financefreedom::cli;
use financefreedom::commands::{self, App};
use financefreedom::config::Config;
use financefreedom::store::TokenStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches)?;

    let store = TokenStore::open_or_init(config.data_dir.as_deref())?;
    let app = App::new(&config, store)?;
    commands::dispatch(&app, &matches).await
}
