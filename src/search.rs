// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Filter and sort deals for a selection.

use std::cmp::Ordering;

use tracing::{event, instrument, Level};

use crate::deals::{Dataset, Deal};
use crate::duration::{Duration, DurationError};
use crate::error::{Error, Result};
use crate::format::{format_rows, ResultRows};
use crate::selection::{Selection, SortMode};

/// A matching deal along with its parsed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDeal {
    /// The deal from the dataset.
    pub deal: Deal,
    /// The parsed duration of `deal`.
    pub duration: Duration,
}

/// Aggregates over all deals of a result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Total {
    /// Sum of all costs.
    pub cost: f64,
    /// Sum of all durations.
    pub duration: Duration,
}

impl Total {
    fn of(deals: &[RankedDeal]) -> Result<Self> {
        let mut cost = 0.0;
        let mut minutes: u32 = 0;
        for ranked in deals {
            cost += ranked.deal.cost;
            minutes = minutes
                .checked_add(ranked.duration.minutes())
                .ok_or_else(|| Error::InvalidDuration {
                    reference: ranked.deal.reference.clone(),
                    source: DurationError::TotalOutOfRange,
                })?;
        }
        Ok(Self {
            cost,
            duration: Duration::from_minutes(minutes),
        })
    }
}

/// Matching deals in the selected order, and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Matching deals, sorted.
    pub deals: Vec<RankedDeal>,
    /// The total over `deals`.
    pub total: Total,
}

/// A successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// The sorted deals.
    pub result: ResultSet,
    /// `result` formatted for display.
    pub rows: ResultRows,
}

/// Why a selection can't be searched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    /// Departure or arrival is not picked.
    MissingSelection,
    /// Departure and arrival are the same city.
    SameCity,
}

/// What a search found.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The selection is incomplete or contradictory.
    Invalid(InvalidSelection),
    /// No deal goes from `departure` to `arrival`.
    Empty {
        /// The selected departure city.
        departure: String,
        /// The selected arrival city.
        arrival: String,
    },
    /// At least one deal matches.
    Success(Itinerary),
}

fn sort_deals(deals: &mut [RankedDeal], mode: SortMode) {
    // Both sorts are stable: deals with equal keys keep dataset order.
    match mode {
        SortMode::Cheapest => deals.sort_by(|a, b| {
            // Costs are validated to be finite
            a.deal
                .cost
                .partial_cmp(&b.deal.cost)
                .unwrap_or(Ordering::Equal)
        }),
        SortMode::Fastest => deals.sort_by_key(|ranked| ranked.duration.minutes()),
    }
}

/// Find all deals of `dataset` matching `selection`.
///
/// Cities are compared exactly. Fails if a matching deal has a malformed
/// duration; incomplete or contradictory selections are reported as
/// [`SearchOutcome::Invalid`].
#[instrument(skip_all, fields(sort = %selection.sort_mode()))]
pub fn search(dataset: &Dataset, selection: &Selection) -> Result<SearchOutcome> {
    let departure = selection.departure().filter(|city| !city.is_empty());
    let arrival = selection.arrival().filter(|city| !city.is_empty());
    let (departure, arrival) = match (departure, arrival) {
        (Some(departure), Some(arrival)) => (departure, arrival),
        _ => {
            event!(Level::INFO, "Departure or arrival missing");
            return Ok(SearchOutcome::Invalid(InvalidSelection::MissingSelection));
        }
    };
    event!(Level::INFO, "From {} to {}", departure, arrival);
    if departure == arrival {
        event!(Level::INFO, "Departure and arrival are the same");
        return Ok(SearchOutcome::Invalid(InvalidSelection::SameCity));
    }

    let mut deals = dataset
        .deals
        .iter()
        .filter(|deal| deal.departure == departure && deal.arrival == arrival)
        .map(|deal| {
            deal.parsed_duration().map(|duration| RankedDeal {
                deal: deal.clone(),
                duration,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    event!(Level::TRACE, "{} of {} deals match", deals.len(), dataset.deals.len());
    if deals.is_empty() {
        return Ok(SearchOutcome::Empty {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
        });
    }

    sort_deals(&mut deals, selection.sort_mode());
    event!(
        Level::INFO,
        "Sorted {} deals by {}",
        deals.len(),
        selection.sort_mode()
    );
    let total = Total::of(&deals)?;
    let result = ResultSet { deals, total };
    let rows = format_rows(&result, &dataset.currency);
    Ok(SearchOutcome::Success(Itinerary { result, rows }))
}
