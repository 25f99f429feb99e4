// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::config::DEFAULT_BASE_URL;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn credentials(cmd: Command) -> Command {
    cmd.arg(Arg::new("email").long("email").required(true))
        .arg(Arg::new("password").long("password").required(true))
}

fn kind_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .required(true)
}

pub fn build_cli() -> Command {
    Command::new("financefreedom")
        .about("FinanceFreedom: track income and expenses against your FinanceFreedom account")
        .version(clap::crate_version!())
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .env("FINANCEFREEDOM_BASE_URL")
                .default_value(DEFAULT_BASE_URL)
                .global(true)
                .help("Backend API base URL"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .env("FINANCEFREEDOM_TIMEOUT")
                .value_parser(value_parser!(u64))
                .default_value("30")
                .global(true)
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .env("FINANCEFREEDOM_DATA_DIR")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Directory holding the saved session"),
        )
        .subcommand(credentials(
            Command::new("register").about("Create an account and sign in"),
        ))
        .subcommand(credentials(Command::new("login").about("Sign in")))
        .subcommand(Command::new("logout").about("Sign out and forget the saved session"))
        .subcommand(Command::new("status").about("Show whether a session is active"))
        .subcommand(json_flags(Command::new("me").about("Show the signed-in profile")))
        .subcommand(
            Command::new("home")
                .about("Dashboard: balance, income, expense and recent transactions")
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(kind_arg())
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("categories")
                .about("List the categories offered for a transaction type")
                .arg(kind_arg()),
        )
        .subcommand(json_flags(
            Command::new("report")
                .about("Monthly income/expense summary")
                .arg(Arg::new("month").long("month").help("YYYY-MM, default current month")),
        ))
}
