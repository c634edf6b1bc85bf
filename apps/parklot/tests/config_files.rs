//! Loading configuration from disk.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use parklot::config::{DEFAULT_CONFIG_FILE, resolve_path};
use parklot::{AppError, Config};
use parklot_core::{Facility, ManualClock, NegativeElapsed, Timestamp, VehicleClass};
use std::fs;

#[test]
fn full_file_round_trips_into_a_facility() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lot.toml");
    fs::write(
        &path,
        r#"
rows = 2
cols = 6
checkin_pause_ms = 250

[fare]
base_rate = 100.0
hourly_rate = 40.0
negative_elapsed = "clamp_to_zero"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.rows, 2);
    assert_eq!(config.cols, 6);
    assert_eq!(config.checkin_pause_ms, 250);
    assert_eq!(config.fare.negative_elapsed, NegativeElapsed::ClampToZero);

    let clock = ManualClock::new(Timestamp::from_secs(0));
    let mut facility = Facility::with_clock(config.rows, config.cols, &clock)
        .unwrap()
        .with_fare_schedule(config.fare);
    assert_eq!(facility.available_spots(), 12);

    facility.check_in(VehicleClass::Car, "CFG", 1, 5).unwrap();
    clock.advance_minutes(150);
    let receipt = facility.check_out(1, 5).unwrap();
    assert_eq!(format!("{:.2}", receipt.fare), "200.00");
}

#[test]
fn default_file_is_discovered_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(resolve_path(None, dir.path()), None);

    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "rows = 4\n").unwrap();
    let found = resolve_path(None, dir.path()).unwrap();
    assert_eq!(Config::from_file(&found).unwrap().rows, 4);
}

#[test]
fn explicit_path_wins_even_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "rows = 4\n").unwrap();

    let explicit = dir.path().join("missing.toml");
    let chosen = resolve_path(Some(&explicit), dir.path()).unwrap();
    assert_eq!(chosen, explicit);
    assert!(matches!(Config::from_file(&chosen), Err(AppError::Config(_))));
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "rows = \"many\"\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
