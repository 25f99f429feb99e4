// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::App;
use crate::repository::AuthRepository;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub async fn register(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = AuthRepository::new(&app.api, &app.store)
        .register(email, password)
        .await?;
    println!("Registered and signed in as {}", user.email);
    Ok(())
}

pub async fn login(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = AuthRepository::new(&app.api, &app.store)
        .login(email, password)
        .await?;
    println!("Signed in as {}", user.email);
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    AuthRepository::new(&app.api, &app.store).logout()?;
    println!("Signed out");
    Ok(())
}

pub fn status(app: &App) -> Result<()> {
    if AuthRepository::new(&app.api, &app.store).is_logged_in() {
        println!("Signed in");
    } else {
        println!("Not signed in. Run `financefreedom login` first.");
    }
    Ok(())
}

pub async fn me(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let user = AuthRepository::new(&app.api, &app.store).me().await?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &user)? {
        let id = user.id.clone().unwrap_or_else(|| "-".into());
        println!(
            "{}",
            pretty_table(&["ID", "Email"], vec![vec![id, user.email.clone()]])
        );
    }
    Ok(())
}
