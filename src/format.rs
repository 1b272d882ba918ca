// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Presentation independent records for search results.

use serde::Serialize;

use crate::search::{InvalidSelection, ResultSet, SearchOutcome};

/// Labels for a single deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealRow {
    /// Where the deal starts.
    pub departure_label: String,
    /// Where the deal ends.
    pub arrival_label: String,
    /// Currency and cost, e.g. `€80`.
    pub price_label: String,
    /// Transport, reference and duration, e.g. `train - TPR0400 for 4h0`.
    pub details_label: String,
}

/// Labels for the total of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalRow {
    /// Total duration, e.g. `6h30`.
    pub total_duration_label: String,
    /// Currency and total cost, e.g. `€180`.
    pub total_cost_label: String,
}

/// All rows of a search, the total last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRows {
    /// One row per deal, in result order.
    pub rows: Vec<DealRow>,
    /// The trailing total.
    pub total: TotalRow,
}

/// Format `result` with costs in `currency`.
///
/// Costs are not rounded.
pub fn format_rows(result: &ResultSet, currency: &str) -> ResultRows {
    let rows = result
        .deals
        .iter()
        .map(|ranked| DealRow {
            departure_label: ranked.deal.departure.clone(),
            arrival_label: ranked.deal.arrival.clone(),
            price_label: format!("{}{}", currency, ranked.deal.cost),
            details_label: format!(
                "{} - {} for {}",
                ranked.deal.transport, ranked.deal.reference, ranked.duration
            ),
        })
        .collect();
    ResultRows {
        rows,
        total: TotalRow {
            total_duration_label: result.total.duration.to_string(),
            total_cost_label: format!("{}{}", currency, result.total.cost),
        },
    }
}

/// How severe an alert is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// The user did something wrong.
    Danger,
    /// Nothing wrong, but nothing found either.
    Warning,
}

/// A message to show instead of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// How severe this alert is.
    pub level: AlertLevel,
    /// The text to show.
    pub message: String,
}

impl SearchOutcome {
    /// The message to show the user for this outcome.
    ///
    /// `None` for success.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            SearchOutcome::Invalid(InvalidSelection::MissingSelection) => Some(Alert {
                level: AlertLevel::Danger,
                message: "Please, select both departure and arrival".to_string(),
            }),
            SearchOutcome::Invalid(InvalidSelection::SameCity) => Some(Alert {
                level: AlertLevel::Danger,
                message: "Ooops!!, Departure and arrival are the same".to_string(),
            }),
            SearchOutcome::Empty { departure, arrival } => Some(Alert {
                level: AlertLevel::Warning,
                message: format!(
                    "Sorry, but we could not find trips from {} to {}",
                    departure, arrival
                ),
            }),
            SearchOutcome::Success(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deals::Deal;
    use crate::duration::{Duration, TripDuration};
    use crate::search::{RankedDeal, Total};
    use pretty_assertions::assert_eq;

    fn ranked(cost: f64, h: u32, m: u32, transport: &str, reference: &str) -> RankedDeal {
        RankedDeal {
            deal: Deal {
                departure: "London".to_string(),
                arrival: "Paris".to_string(),
                cost,
                duration: TripDuration::new(h, m),
                transport: transport.to_string(),
                reference: reference.to_string(),
            },
            duration: Duration { h, m },
        }
    }

    #[test]
    fn rows_and_total() {
        let result = ResultSet {
            deals: vec![
                ranked(40.0, 5, 5, "bus", "BLP0505"),
                ranked(120.5, 2, 15, "train", "TLP0215"),
            ],
            total: Total {
                cost: 160.5,
                duration: Duration { h: 7, m: 20 },
            },
        };
        assert_eq!(
            format_rows(&result, "€"),
            ResultRows {
                rows: vec![
                    DealRow {
                        departure_label: "London".to_string(),
                        arrival_label: "Paris".to_string(),
                        price_label: "€40".to_string(),
                        details_label: "bus - BLP0505 for 5h5".to_string(),
                    },
                    DealRow {
                        departure_label: "London".to_string(),
                        arrival_label: "Paris".to_string(),
                        price_label: "€120.5".to_string(),
                        details_label: "train - TLP0215 for 2h15".to_string(),
                    },
                ],
                total: TotalRow {
                    total_duration_label: "7h20".to_string(),
                    total_cost_label: "€160.5".to_string(),
                },
            }
        );
    }

    #[test]
    fn rows_serialize_to_json() {
        let result = ResultSet {
            deals: vec![ranked(10.0, 0, 45, "car", "CLP0045")],
            total: Total {
                cost: 10.0,
                duration: Duration { h: 0, m: 45 },
            },
        };
        assert_eq!(
            serde_json::to_value(format_rows(&result, "$")).unwrap(),
            serde_json::json!({
                "rows": [{
                    "departure_label": "London",
                    "arrival_label": "Paris",
                    "price_label": "$10",
                    "details_label": "car - CLP0045 for 0h45"
                }],
                "total": {
                    "total_duration_label": "0h45",
                    "total_cost_label": "$10"
                }
            })
        );
    }

    #[test]
    fn alerts() {
        assert_eq!(
            SearchOutcome::Invalid(InvalidSelection::MissingSelection).alert(),
            Some(Alert {
                level: AlertLevel::Danger,
                message: "Please, select both departure and arrival".to_string()
            })
        );
        assert_eq!(
            SearchOutcome::Invalid(InvalidSelection::SameCity)
                .alert()
                .map(|alert| alert.level),
            Some(AlertLevel::Danger)
        );
        assert_eq!(
            SearchOutcome::Empty {
                departure: "Paris".to_string(),
                arrival: "Madrid".to_string()
            }
            .alert(),
            Some(Alert {
                level: AlertLevel::Warning,
                message: "Sorry, but we could not find trips from Paris to Madrid".to_string()
            })
        );
    }
}
