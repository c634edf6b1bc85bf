//! # Fare Rule
//!
//! `fare = base_rate + hours_parked * hourly_rate`, rounded to two decimals.
//!
//! This is the only place in the CORE that does floating-point arithmetic.

#![allow(clippy::float_arithmetic)]

use crate::types::{MILLIS_PER_HOUR, Timestamp};
use serde::{Deserialize, Serialize};

/// Flat charge for every completed session.
pub const DEFAULT_BASE_RATE: f64 = 400.0;

/// Charge per hour parked, applied to fractional hours.
pub const DEFAULT_HOURLY_RATE: f64 = 100.0;

/// How to treat an exit time earlier than the entry time (host clock moved
/// backwards while the vehicle was parked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeElapsed {
    /// Apply the formula as-is; the fare drops below the base rate.
    #[default]
    Charge,
    /// Treat negative elapsed time as zero hours.
    ClampToZero,
}

/// Rates and policy used to price a parking session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FareSchedule {
    pub base_rate: f64,
    pub hourly_rate: f64,
    pub negative_elapsed: NegativeElapsed,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            hourly_rate: DEFAULT_HOURLY_RATE,
            negative_elapsed: NegativeElapsed::Charge,
        }
    }
}

impl FareSchedule {
    /// Price a session of `hours_parked` hours.
    #[must_use]
    pub fn fare(&self, hours_parked: f64) -> f64 {
        let hours = match self.negative_elapsed {
            NegativeElapsed::ClampToZero if hours_parked < 0.0 => 0.0,
            _ => hours_parked,
        };
        round_cents(self.base_rate + hours * self.hourly_rate)
    }
}

/// Price a session with the default rates (400.0 base, 100.0 per hour).
///
/// No clamping: negative `hours_parked` yields a fare below the base rate.
#[must_use]
pub fn calculate_fare(hours_parked: f64) -> f64 {
    FareSchedule::default().fare(hours_parked)
}

/// Fractional hours between two instants. Negative if `exit` precedes `entry`.
#[must_use]
pub fn hours_between(entry: Timestamp, exit: Timestamp) -> f64 {
    exit.millis_since(entry) as f64 / MILLIS_PER_HOUR as f64
}

/// Round to the nearest cent using the exact decimal value of `amount`.
///
/// Scaling by 100 first would round the product, not the amount: 400.005 is
/// stored as 400.00499.. and must come out as 400.00, not 400.01.
fn round_cents(amount: f64) -> f64 {
    format!("{amount:.2}").parse().unwrap_or(amount)
}
