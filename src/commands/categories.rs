// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::category::resolve_category;
use crate::models::TxKind;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = m.get_one::<String>("type").unwrap().parse()?;
    let data = kind
        .categories()
        .iter()
        .map(|label| vec![label.to_string(), resolve_category(label, kind)])
        .collect();
    println!("{}", pretty_table(&["Category", "Sent as"], data));
    Ok(())
}
