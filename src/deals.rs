// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The deal dataset.

use serde::{Deserialize, Serialize};

use crate::duration::{Duration, TripDuration};
use crate::error::{Error, Result};

/// A single travel offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// The city this deal starts in.
    pub departure: String,
    /// The city this deal ends in.
    pub arrival: String,
    /// The price, in the currency of the dataset.
    pub cost: f64,
    /// How long the trip takes.
    pub duration: TripDuration,
    /// The means of transport, e.g. "train".
    pub transport: String,
    /// The booking reference of this deal.
    pub reference: String,
}

impl Deal {
    /// Parse the duration of this deal.
    pub fn parsed_duration(&self) -> Result<Duration> {
        self.duration
            .parse()
            .map_err(|source| Error::InvalidDuration {
                reference: self.reference.clone(),
                source,
            })
    }
}

/// All deals on offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The currency symbol for all costs.
    #[serde(default)]
    pub currency: String,
    /// The deals, in the order the backend sent them.
    pub deals: Vec<Deal>,
}

impl Dataset {
    /// Load a dataset from parsed JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let dataset: Self = serde_json::from_value(value)
            .map_err(|error| Error::InvalidDataset(error.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self =
            serde_json::from_str(json).map_err(|error| Error::InvalidDataset(error.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the invariants serde can't check for us.
    pub fn validate(&self) -> Result<()> {
        match self
            .deals
            .iter()
            .find(|deal| !deal.cost.is_finite() || deal.cost < 0.0)
        {
            Some(deal) => Err(Error::InvalidDataset(format!(
                "Deal {} has invalid cost {}",
                deal.reference, deal.cost
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn loads_backend_response() {
        let dataset = Dataset::from_value(json!({
            "currency": "€",
            "deals": [{
                "transport": "train",
                "departure": "London",
                "arrival": "Amsterdam",
                "duration": {"h": "05", "m": "00"},
                "cost": 160,
                "discount": 0,
                "reference": "TLA0500"
            }]
        }))
        .unwrap();
        assert_eq!(dataset.currency, "€");
        assert_eq!(dataset.deals.len(), 1);
        let deal = &dataset.deals[0];
        assert_eq!(deal.departure, "London");
        assert_eq!(deal.arrival, "Amsterdam");
        assert_eq!(deal.cost, 160.0);
        assert_eq!(deal.parsed_duration(), Ok(Duration { h: 5, m: 0 }));
    }

    #[test]
    fn currency_is_optional() {
        let dataset = Dataset::from_json(r#"{"deals": []}"#).unwrap();
        assert_eq!(dataset.currency, "");
        assert!(dataset.deals.is_empty());
    }

    #[test]
    fn rejects_missing_deals() {
        assert!(matches!(
            Dataset::from_value(json!({"currency": "€"})),
            Err(Error::InvalidDataset(_))
        ));
    }

    #[test]
    fn rejects_deals_which_are_not_a_list() {
        assert!(matches!(
            Dataset::from_value(json!({"currency": "€", "deals": {"departure": "Paris"}})),
            Err(Error::InvalidDataset(_))
        ));
    }

    #[test]
    fn rejects_deal_without_reference() {
        let result = Dataset::from_value(json!({
            "currency": "€",
            "deals": [{
                "transport": "bus",
                "departure": "Paris",
                "arrival": "Rome",
                "duration": {"h": 2, "m": 30},
                "cost": 100
            }]
        }));
        match result {
            Err(Error::InvalidDataset(message)) => assert!(message.contains("reference")),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_cost() {
        let result = Dataset::from_value(json!({
            "currency": "€",
            "deals": [{
                "transport": "bus",
                "departure": "Paris",
                "arrival": "Rome",
                "duration": {"h": 2, "m": 30},
                "cost": -1,
                "reference": "BPR0230"
            }]
        }));
        assert_eq!(
            result,
            Err(Error::InvalidDataset(
                "Deal BPR0230 has invalid cost -1".to_string()
            ))
        );
    }

    #[test]
    fn malformed_duration_fails_late() {
        let dataset = Dataset::from_value(json!({
            "currency": "€",
            "deals": [{
                "transport": "car",
                "departure": "Paris",
                "arrival": "Rome",
                "duration": {"h": "later", "m": 0},
                "cost": 10,
                "reference": "CPR"
            }]
        }))
        .unwrap();
        assert!(matches!(
            dataset.deals[0].parsed_duration(),
            Err(Error::InvalidDuration { reference, .. }) if reference == "CPR"
        ));
    }
}
