// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors of the deal selector.

use crate::duration::DurationError;

/// Failures of the deal selector.
///
/// User mistakes like an incomplete selection are not errors; see
/// [`SearchOutcome`](crate::SearchOutcome) for those.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The dataset handed to the selector is malformed.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
    /// A sort mode other than `cheapest` or `fastest`.
    #[error("Invalid sort mode {0:?}, expected \"cheapest\" or \"fastest\"")]
    InvalidSortMode(String),
    /// A deal carries a duration which does not denote hours and minutes.
    #[error("Invalid duration of deal {reference}")]
    InvalidDuration {
        /// The reference of the offending deal.
        reference: String,
        /// What's wrong with the duration.
        #[source]
        source: DurationError,
    },
}

/// Results of the deal selector.
pub type Result<T> = std::result::Result<T, Error>;
