// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Travel durations in hours and minutes.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Why a duration field does not denote a usable number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// The field has no leading digits.
    #[error("{field} {value:?} is not a number")]
    NotANumber {
        /// Either `h` or `m`.
        field: &'static str,
        /// The raw value of the field.
        value: String,
    },
    /// The field denotes a negative number.
    #[error("{field} {value} is negative")]
    Negative {
        /// Either `h` or `m`.
        field: &'static str,
        /// The raw value of the field.
        value: String,
    },
    /// The field, or the whole duration in minutes, does not fit into 32 bits.
    #[error("{field} {value} is too large")]
    OutOfRange {
        /// Either `h` or `m`.
        field: &'static str,
        /// The raw value of the field.
        value: String,
    },
    /// The sum of all durations of a result does not fit into 32 bits.
    #[error("the total duration is too large")]
    TotalOutOfRange,
    /// The minutes field exceeds 59.
    #[error("{0} minutes do not make a valid minute of an hour")]
    TooManyMinutes(u32),
}

/// A single raw field of a duration in the dataset.
///
/// Backends send both numbers and numeric strings like `"05"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    /// A non-negative integral JSON number.
    Integer(u64),
    /// Any other JSON number.
    Number(f64),
    /// A string, parsed leniently when needed.
    Text(String),
}

impl DurationField {
    /// Parse this field like a base 10 `parseInt`.
    ///
    /// Leading whitespace and an optional `+` are skipped, then the longest
    /// prefix of digits is taken; anything after it is ignored.
    fn parse(&self, field: &'static str) -> Result<u32, DurationError> {
        match self {
            DurationField::Integer(value) => {
                u32::try_from(*value).map_err(|_| DurationError::OutOfRange {
                    field,
                    value: value.to_string(),
                })
            }
            DurationField::Number(value) => {
                let truncated = value.trunc();
                if !truncated.is_finite() {
                    Err(DurationError::NotANumber {
                        field,
                        value: value.to_string(),
                    })
                } else if truncated < 0.0 {
                    Err(DurationError::Negative {
                        field,
                        value: value.to_string(),
                    })
                } else if (u32::MAX as f64) < truncated {
                    Err(DurationError::OutOfRange {
                        field,
                        value: value.to_string(),
                    })
                } else {
                    Ok(truncated as u32)
                }
            }
            DurationField::Text(text) => parse_leading_integer(field, text),
        }
    }
}

impl From<u32> for DurationField {
    fn from(value: u32) -> Self {
        DurationField::Integer(value.into())
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

fn parse_leading_integer(field: &'static str, text: &str) -> Result<u32, DurationError> {
    let trimmed = text.trim_start();
    if let Some(negative) = trimmed.strip_prefix('-') {
        return if leading_digits(negative).is_empty() {
            Err(DurationError::NotANumber {
                field,
                value: text.to_string(),
            })
        } else {
            Err(DurationError::Negative {
                field,
                value: text.to_string(),
            })
        };
    }
    let digits = leading_digits(trimmed.strip_prefix('+').unwrap_or(trimmed));
    if digits.is_empty() {
        Err(DurationError::NotANumber {
            field,
            value: text.to_string(),
        })
    } else {
        digits.parse().map_err(|_| DurationError::OutOfRange {
            field,
            value: text.to_string(),
        })
    }
}

/// The duration of a deal as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDuration {
    /// Hours.
    pub h: DurationField,
    /// Minutes of the last hour.
    pub m: DurationField,
}

impl TripDuration {
    /// Create a raw duration from plain numbers.
    pub fn new(h: u32, m: u32) -> Self {
        Self {
            h: h.into(),
            m: m.into(),
        }
    }

    /// Parse the raw fields into a normalized [`Duration`].
    pub fn parse(&self) -> Result<Duration, DurationError> {
        let h = self.h.parse("h")?;
        let m = self.m.parse("m")?;
        if 59 < m {
            return Err(DurationError::TooManyMinutes(m));
        }
        let duration = Duration { h, m };
        // Make sure the total in minutes is representable.
        h.checked_mul(60)
            .and_then(|minutes| minutes.checked_add(m))
            .ok_or_else(|| DurationError::OutOfRange {
                field: "h",
                value: h.to_string(),
            })?;
        Ok(duration)
    }
}

/// A parsed duration with `m` in `0..60`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Hours.
    pub h: u32,
    /// Minutes of the last hour.
    pub m: u32,
}

impl Duration {
    /// The total number of minutes.
    pub fn minutes(self) -> u32 {
        self.h * 60 + self.m
    }

    /// Split `minutes` into hours and minutes.
    pub fn from_minutes(minutes: u32) -> Self {
        let h = minutes / 60;
        Self {
            h,
            m: minutes - h * 60,
        }
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h{}", self.h, self.m)
    }
}

/// Convert a raw duration into total minutes.
pub fn duration_to_minutes(duration: &TripDuration) -> Result<u32, DurationError> {
    duration.parse().map(Duration::minutes)
}

/// Convert total minutes back into hours and minutes.
pub fn minutes_to_duration(minutes: u32) -> Duration {
    Duration::from_minutes(minutes)
}
