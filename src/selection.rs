// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The user's choice of cities and order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// How to order matching deals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Lowest cost first.
    #[default]
    Cheapest,
    /// Shortest duration first.
    Fastest,
}

impl SortMode {
    /// The name of this mode, as accepted by [`SortMode::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Cheapest => "cheapest",
            SortMode::Fastest => "fastest",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cheapest" => Ok(SortMode::Cheapest),
            "fastest" => Ok(SortMode::Fastest),
            other => Err(Error::InvalidSortMode(other.to_string())),
        }
    }
}

/// What the user picked so far.
///
/// Nothing is validated here; [`search`](crate::search::search) tells
/// incomplete selections apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    departure: Option<String>,
    arrival: Option<String>,
    sort_mode: SortMode,
}

impl Selection {
    /// Pick the departure city.
    pub fn set_departure<S: Into<String>>(&mut self, city: S) {
        let city = city.into();
        debug!("Departure set to {}", city);
        self.departure = Some(city);
    }

    /// Pick the arrival city.
    pub fn set_arrival<S: Into<String>>(&mut self, city: S) {
        let city = city.into();
        debug!("Arrival set to {}", city);
        self.arrival = Some(city);
    }

    /// Pick the order of results.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        debug!("Sort mode set to {}", mode);
        self.sort_mode = mode;
    }

    /// Forget both cities and go back to the cheapest order.
    pub fn reset(&mut self) {
        debug!("Selection reset");
        *self = Self::default();
    }

    /// The departure city, if picked.
    pub fn departure(&self) -> Option<&str> {
        self.departure.as_deref()
    }

    /// The arrival city, if picked.
    pub fn arrival(&self) -> Option<&str> {
        self.arrival.as_deref()
    }

    /// The order of results.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Whether both cities are picked.
    pub fn is_complete(&self) -> bool {
        self.departure.is_some() && self.arrival.is_some()
    }
}
