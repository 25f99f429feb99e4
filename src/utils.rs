// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

/// Separator accepted in typed amounts, either as a decimal point or as a
/// thousands marker ("500.000").
const AMOUNT_SEPARATOR: char = '.';

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Canonical `YYYY-MM`: a one-digit month ("2025-1") comes back zero-padded.
pub fn parse_month(s: &str) -> Result<String> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(first.format("%Y-%m").to_string())
}

pub fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

/// Parse a user-typed amount.
///
/// Accepts plain decimals ("1.5") and dot-grouped integers ("500.000",
/// "10.000.000"). With a single dot, exactly three trailing digits make it a
/// thousands marker; anything else makes it the decimal point. Returns `None`
/// for blank input, foreign characters, or values that do not fit a `Decimal`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let t = input.trim();
    if t.is_empty() {
        return None;
    }
    if !t.chars().all(|c| c.is_ascii_digit() || c == AMOUNT_SEPARATOR) {
        return None;
    }
    if !t.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let separators = t.matches(AMOUNT_SEPARATOR).count();
    match separators {
        0 => t.parse::<Decimal>().ok(),
        1 => {
            let (int_part, frac_part) = t.split_once(AMOUNT_SEPARATOR)?;
            if frac_part.len() == 3 {
                format!("{int_part}{frac_part}").parse::<Decimal>().ok()
            } else {
                let int_part = if int_part.is_empty() { "0" } else { int_part };
                let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
                format!("{int_part}.{frac_part}").parse::<Decimal>().ok()
            }
        }
        _ => t.replace(AMOUNT_SEPARATOR, "").parse::<Decimal>().ok(),
    }
}

/// Render an amount the way the app displays money: "Rp 1.500.000,5".
pub fn fmt_money(d: &Decimal) -> String {
    let rounded = d.round_dp(2).normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}Rp {grouped},{f}"),
        None => format!("{sign}Rp {grouped}"),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
