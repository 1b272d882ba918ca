// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Departure and arrival cities to choose from.

use std::collections::BTreeSet;

use crate::deals::Deal;

/// The cities to choose from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityLists {
    /// Sorted cities which have at least one departing deal.
    pub departures: Vec<String>,
    /// Sorted cities which have at least one arriving deal.
    pub arrivals: Vec<String>,
}

fn sorted_unique<'a, I>(cities: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    cities
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

impl CityLists {
    /// Collect departure and arrival cities of `deals`.
    ///
    /// Arrivals are collected separately since a city may only ever be reached
    /// but never left, or vice versa.
    pub fn from_deals(deals: &[Deal]) -> Self {
        Self {
            departures: sorted_unique(deals.iter().map(|deal| deal.departure.as_str())),
            arrivals: sorted_unique(deals.iter().map(|deal| deal.arrival.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::TripDuration;
    use pretty_assertions::assert_eq;

    fn deal(departure: &str, arrival: &str) -> Deal {
        Deal {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            cost: 10.0,
            duration: TripDuration::new(1, 0),
            transport: "bus".to_string(),
            reference: format!("B{departure}{arrival}"),
        }
    }

    #[test]
    fn sorted_and_deduplicated() {
        let deals = vec![
            deal("Rome", "Paris"),
            deal("Paris", "Rome"),
            deal("Amsterdam", "Rome"),
            deal("Paris", "Madrid"),
            deal("Rome", "Amsterdam"),
        ];
        let cities = CityLists::from_deals(&deals);
        assert_eq!(cities.departures, vec!["Amsterdam", "Paris", "Rome"]);
        assert_eq!(cities.arrivals, vec!["Amsterdam", "Madrid", "Paris", "Rome"]);
    }

    #[test]
    fn every_city_has_a_deal() {
        let deals = vec![
            deal("Stockholm", "Oslo"),
            deal("oslo", "Stockholm"),
            deal("Oslo", "Kyiv"),
            deal("Stockholm", "Kyiv"),
        ];
        let cities = CityLists::from_deals(&deals);
        assert!(cities.departures.windows(2).all(|w| w[0] < w[1]));
        assert!(cities.arrivals.windows(2).all(|w| w[0] < w[1]));
        for city in &cities.departures {
            assert!(deals.iter().any(|d| &d.departure == city), "{city}");
        }
        for city in &cities.arrivals {
            assert!(deals.iter().any(|d| &d.arrival == city), "{city}");
        }
        // Case matters
        assert_eq!(cities.departures, vec!["Oslo", "Stockholm", "oslo"]);
    }

    #[test]
    fn no_deals_no_cities() {
        assert_eq!(CityLists::from_deals(&[]), CityLists::default());
    }
}
