// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The deal selector.

use tracing::{event, Level};

use crate::cities::CityLists;
use crate::deals::Dataset;
use crate::error::Result;
use crate::search::{search, SearchOutcome};
use crate::selection::{Selection, SortMode};

/// Pick deals between two cities.
///
/// Owns the dataset, the cities derived from it, and the current selection.
/// UI adapters call the setters as the user picks cities, then [`search`].
///
/// [`search`]: DealSelector::search
#[derive(Debug, Clone)]
pub struct DealSelector {
    dataset: Dataset,
    cities: CityLists,
    selection: Selection,
    last_outcome: Option<SearchOutcome>,
}

impl DealSelector {
    /// Create a selector for a dataset.
    ///
    /// Fails if a deal has an invalid cost.
    pub fn new(dataset: Dataset) -> Result<Self> {
        dataset.validate()?;
        Ok(Self::from_valid_dataset(dataset))
    }

    fn from_valid_dataset(dataset: Dataset) -> Self {
        let cities = CityLists::from_deals(&dataset.deals);
        event!(
            Level::INFO,
            "Loaded {} deals from {} departure and to {} arrival cities",
            dataset.deals.len(),
            cities.departures.len(),
            cities.arrivals.len()
        );
        Self {
            dataset,
            cities,
            selection: Selection::default(),
            last_outcome: None,
        }
    }

    /// Create a selector for a parsed JSON backend response.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Dataset::from_value(value).map(Self::from_valid_dataset)
    }

    /// Create a selector for a JSON backend response.
    pub fn from_json(json: &str) -> Result<Self> {
        Dataset::from_json(json).map(Self::from_valid_dataset)
    }

    /// All departure cities, sorted.
    pub fn departure_cities(&self) -> &[String] {
        &self.cities.departures
    }

    /// All arrival cities, sorted.
    pub fn arrival_cities(&self) -> &[String] {
        &self.cities.arrivals
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pick the departure city.
    pub fn set_departure<S: Into<String>>(&mut self, city: S) {
        self.selection.set_departure(city);
    }

    /// Pick the arrival city.
    pub fn set_arrival<S: Into<String>>(&mut self, city: S) {
        self.selection.set_arrival(city);
    }

    /// Pick the order of results.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.selection.set_sort_mode(mode);
    }

    /// Pick the order of results by name.
    ///
    /// Leaves the selection untouched if `mode` is neither `cheapest` nor
    /// `fastest`.
    pub fn set_sort_mode_str(&mut self, mode: &str) -> Result<()> {
        let mode = mode.parse()?;
        self.set_sort_mode(mode);
        Ok(())
    }

    /// Search deals for the current selection.
    ///
    /// The outcome is kept until the next search or reset.  On error the
    /// previous outcome is discarded.
    pub fn search(&mut self) -> Result<&SearchOutcome> {
        self.last_outcome = None;
        let outcome = search(&self.dataset, &self.selection)?;
        Ok(&*self.last_outcome.insert(outcome))
    }

    /// The outcome of the last search, if any.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Clear the selection and forget the last outcome.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.last_outcome = None;
    }
}
