// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};
use std::io::Write;

use anyhow::{Context, Result};
use trips::{Alert, AlertLevel, DealRow, SearchOutcome, TotalRow};

/// How to print results.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

struct RowDisplay<'a>(&'a DealRow);

impl Display for RowDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {}, {: >8}, {}",
            self.0.departure_label, self.0.arrival_label, self.0.price_label, self.0.details_label
        )
    }
}

struct TotalDisplay<'a>(&'a TotalRow);

impl Display for TotalDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total {}, {}",
            self.0.total_duration_label, self.0.total_cost_label
        )
    }
}

struct AlertDisplay<'a>(&'a Alert);

impl Display for AlertDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let icon = match self.0.level {
            AlertLevel::Danger => "⛔",
            AlertLevel::Warning => "⚠",
        };
        write!(f, "{} {}", icon, self.0.message)
    }
}

/// Print the outcome of a search to `out`.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome, output: Output) -> Result<()> {
    match (outcome, output) {
        (SearchOutcome::Success(itinerary), Output::Text) => {
            for row in &itinerary.rows.rows {
                writeln!(out, "{}", RowDisplay(row))?;
            }
            writeln!(out, "{}", TotalDisplay(&itinerary.rows.total))?;
        }
        (SearchOutcome::Success(itinerary), Output::Json) => {
            serde_json::to_writer_pretty(&mut *out, &itinerary.rows)
                .with_context(|| "Failed to write rows as JSON".to_string())?;
            writeln!(out)?;
        }
        (other, Output::Text) => {
            if let Some(alert) = other.alert() {
                writeln!(out, "{}", AlertDisplay(&alert))?;
            }
        }
        (other, Output::Json) => {
            serde_json::to_writer_pretty(&mut *out, &other.alert())
                .with_context(|| "Failed to write alert as JSON".to_string())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print departure and arrival cities to `out`.
pub fn write_cities<W: Write>(
    out: &mut W,
    departures: &[String],
    arrivals: &[String],
    output: Output,
) -> Result<()> {
    match output {
        Output::Text => {
            writeln!(out, "From: {}", departures.join(", "))?;
            writeln!(out, "To: {}", arrivals.join(", "))?;
        }
        Output::Json => {
            let cities = serde_json::json!({
                "departures": departures,
                "arrivals": arrivals,
            });
            serde_json::to_writer_pretty(&mut *out, &cities)
                .with_context(|| "Failed to write cities as JSON".to_string())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
