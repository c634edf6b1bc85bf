//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::Config;
use crate::error::AppError;
use crate::menu::{Menu, OutputMode, render};
use parklot_core::Facility;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Start the interactive attendant menu on stdin/stdout.
pub fn cmd_run(config: &Config, json_mode: bool) -> Result<(), AppError> {
    let mut facility = Facility::new(config.rows, config.cols)?.with_fare_schedule(config.fare);
    tracing::info!(
        rows = config.rows,
        cols = config.cols,
        base_rate = config.fare.base_rate,
        hourly_rate = config.fare.hourly_rate,
        "lot opened"
    );

    let mode = if json_mode {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&mut facility, stdin.lock(), stdout.lock())
        .with_mode(mode)
        .with_checkin_pause(Duration::from_millis(config.checkin_pause_ms))
        .with_utc_offset(config.utc_offset_minutes)
        .run()?;

    if facility.occupied_count() > 0 {
        tracing::warn!(
            parked = facility.occupied_count(),
            "lot closed with vehicles still parked; their records are discarded"
        );
    }
    Ok(())
}

// =============================================================================
// FARE COMMAND
// =============================================================================

/// Price a stay of `hours` hours under the configured schedule.
pub fn cmd_fare(config: &Config, json_mode: bool, hours: f64) -> Result<(), AppError> {
    print!("{}", fare_report(config, json_mode, hours));
    Ok(())
}

/// The `fare` command's output: pretty JSON or a two-line text report.
#[must_use]
pub fn fare_report(config: &Config, json_mode: bool, hours: f64) -> String {
    let fare = config.fare.fare(hours);

    if json_mode {
        let output = serde_json::json!({
            "hours": hours,
            "fare": fare,
            "base_rate": config.fare.base_rate,
            "hourly_rate": config.fare.hourly_rate,
            "negative_elapsed": config.fare.negative_elapsed,
        });
        return pretty(&output);
    }

    format!("Hours Parked: {}\nFare: {}\n", hours, render::money(fare))
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Show the effective configuration and where it came from.
pub fn cmd_config(
    config: &Config,
    source: Option<&Path>,
    json_mode: bool,
) -> Result<(), AppError> {
    print!("{}", config_report(config, source, json_mode));
    Ok(())
}

/// The `config` command's output.
#[must_use]
pub fn config_report(config: &Config, source: Option<&Path>, json_mode: bool) -> String {
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in defaults)".to_string());

    if json_mode {
        let output = serde_json::json!({
            "source": source,
            "config": config,
        });
        return pretty(&output);
    }

    let mut out = String::new();
    out.push_str("Parklot Configuration\n");
    out.push_str("=====================\n");
    out.push_str(&format!("Source: {}\n\n", source));
    out.push_str(&format!("Rows:             {}\n", config.rows));
    out.push_str(&format!("Cols:             {}\n", config.cols));
    out.push_str(&format!(
        "Spots:            {}\n",
        config.rows.saturating_mul(config.cols)
    ));
    out.push_str(&format!("Check-in pause:   {} ms\n", config.checkin_pause_ms));
    out.push_str(&format!("UTC offset:       {} min\n\n", config.utc_offset_minutes));
    out.push_str("Fare:\n");
    out.push_str(&format!("  Base rate:        {}\n", render::money(config.fare.base_rate)));
    out.push_str(&format!(
        "  Hourly rate:      {}\n",
        render::money(config.fare.hourly_rate)
    ));
    out.push_str(&format!(
        "  Negative elapsed: {:?}\n",
        config.fare.negative_elapsed
    ));
    out
}

fn pretty(value: &serde_json::Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}

#[cfg(test)]
#[allow(clippy::float_arithmetic)]
mod tests {
    use super::*;
    use parklot_core::NegativeElapsed;

    #[test]
    fn fare_text_report() {
        let report = fare_report(&Config::default(), false, 1.5);
        assert_eq!(report, "Hours Parked: 1.5\nFare: Rs. 550.00\n");
    }

    #[test]
    fn fare_json_report_uses_schedule() {
        let mut config = Config::default();
        config.fare.negative_elapsed = NegativeElapsed::ClampToZero;

        let report = fare_report(&config, true, -2.0);
        let value: serde_json::Value = serde_json::from_str(&report).expect("json");
        assert_eq!(value["hours"], -2.0);
        assert_eq!(value["fare"], 400.0);
        assert_eq!(value["base_rate"], 400.0);
        assert_eq!(value["negative_elapsed"], "clamp_to_zero");
    }

    #[test]
    fn config_text_report_lists_defaults() {
        let report = config_report(&Config::default(), None, false);
        assert!(report.starts_with("Parklot Configuration\n"));
        assert!(report.contains("Source: (built-in defaults)\n"));
        assert!(report.contains("Spots:            100\n"));
        assert!(report.contains("UTC offset:       0 min\n"));
        assert!(report.contains("  Hourly rate:      Rs. 100.00\n"));
        assert!(report.contains("  Negative elapsed: Charge\n"));
    }

    #[test]
    fn config_json_report_names_source() {
        let config = Config::default().with_overrides(Some(3), Some(4));
        let report = config_report(&config, Some(Path::new("lot.toml")), true);
        let value: serde_json::Value = serde_json::from_str(&report).expect("json");
        assert_eq!(value["source"], "lot.toml");
        assert_eq!(value["config"]["rows"], 3);
        assert_eq!(value["config"]["cols"], 4);
        assert_eq!(value["config"]["fare"]["negative_elapsed"], "charge");
    }
}
