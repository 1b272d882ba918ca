// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(missing_docs, clippy::all)]

//! Pick travel deals between two cities.
//!
//! A [`DealSelector`] takes a dataset of deals, offers the departure and
//! arrival cities to choose from, and finds all deals between the chosen
//! cities, cheapest or fastest first, along with their total.

pub mod cities;
pub mod deals;
pub mod duration;
pub mod error;
pub mod format;
pub mod search;
pub mod selection;
pub mod selector;

pub use deals::{Dataset, Deal};
pub use duration::{duration_to_minutes, minutes_to_duration, Duration, TripDuration};
pub use error::{Error, Result};
pub use format::{Alert, AlertLevel, DealRow, ResultRows, TotalRow};
pub use search::{InvalidSelection, Itinerary, SearchOutcome};
pub use selection::{Selection, SortMode};
pub use selector::DealSelector;
