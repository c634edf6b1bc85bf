//! # Configuration
//!
//! Optional TOML file describing the lot and its fare schedule.
//!
//! ```toml
//! rows = 10
//! cols = 10
//! checkin_pause_ms = 0
//! utc_offset_minutes = 330      # display times in UTC+05:30
//!
//! [fare]
//! base_rate = 400.0
//! hourly_rate = 100.0
//! negative_elapsed = "charge"   # or "clamp_to_zero"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos do not pass
//! silently.

use crate::error::AppError;
use parklot_core::FareSchedule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "parklot.toml";

/// Largest lot the application will build.
pub const MAX_SPOTS: usize = 1_000_000;

/// Real-world UTC offsets span UTC-12:00 to UTC+14:00.
const UTC_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -12 * 60..=14 * 60;

fn default_rows() -> usize {
    10
}
fn default_cols() -> usize {
    10
}

/// Effective application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Pause after a successful check-in, in milliseconds. Menu only.
    #[serde(default)]
    pub checkin_pause_ms: u64,
    /// Shift applied to displayed entry and exit times. Menu only.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub fare: FareSchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            checkin_pause_ms: 0,
            utc_offset_minutes: 0,
            fare: FareSchedule::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply command-line dimension overrides.
    #[must_use]
    pub fn with_overrides(mut self, rows: Option<usize>, cols: Option<usize>) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        self
    }

    /// Reject values the facility or fare rule cannot use.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(AppError::Config(format!(
                "rows and cols must be positive (got {} x {})",
                self.rows, self.cols
            )));
        }
        if self
            .rows
            .checked_mul(self.cols)
            .is_none_or(|spots| spots > MAX_SPOTS)
        {
            return Err(AppError::Config(format!(
                "a {} x {} lot exceeds the {} spot limit",
                self.rows, self.cols, MAX_SPOTS
            )));
        }
        if !UTC_OFFSET_RANGE.contains(&self.utc_offset_minutes) {
            return Err(AppError::Config(format!(
                "utc_offset_minutes must lie within {}..={} (got {})",
                UTC_OFFSET_RANGE.start(),
                UTC_OFFSET_RANGE.end(),
                self.utc_offset_minutes
            )));
        }
        if !self.fare.base_rate.is_finite() || !self.fare.hourly_rate.is_finite() {
            return Err(AppError::Config(
                "fare rates must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which config file to read, if any.
///
/// An explicit path always wins, even if it does not exist (reading it then
/// fails loudly). Otherwise `parklot.toml` in `dir` is used when present.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}
