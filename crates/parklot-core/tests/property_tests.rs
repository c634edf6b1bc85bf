//! # Property-Based Tests
//!
//! Random operation sequences against a facility, checking that the grid and
//! registry never disagree.

#![allow(clippy::unwrap_used, clippy::float_arithmetic)]

use parklot_core::{
    Facility, ManualClock, ParkingError, Plate, Position, Timestamp, VehicleClass, calculate_fare,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

const ROWS: usize = 4;
const COLS: usize = 3;

/// One step of a random session. Coordinates may fall outside the grid.
#[derive(Debug, Clone)]
enum Op {
    CheckIn {
        class: VehicleClass,
        plate: u8,
        row: usize,
        col: usize,
    },
    CheckOut {
        row: usize,
        col: usize,
    },
    Advance(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let class = prop_oneof![
        Just(VehicleClass::Car),
        Just(VehicleClass::Truck),
        Just(VehicleClass::Motorcycle),
    ];
    prop_oneof![
        4 => (class, 0u8..16, 0..ROWS + 1, 0..COLS + 1)
            .prop_map(|(class, plate, row, col)| Op::CheckIn { class, plate, row, col }),
        3 => (0..ROWS + 1, 0..COLS + 1).prop_map(|(row, col)| Op::CheckOut { row, col }),
        1 => (-30i64..240).prop_map(Op::Advance),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every operation sequence keeps the grid, registry and counter in sync,
    /// and matches a simple position -> plate model.
    #[test]
    fn invariants_hold_under_random_sessions(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
        let mut facility = Facility::with_clock(ROWS, COLS, &clock).unwrap();
        let mut model: BTreeMap<Position, Plate> = BTreeMap::new();

        for op in ops {
            match op {
                Op::CheckIn { class, plate, row, col } => {
                    let plate = Plate::new(format!("P{plate}"));
                    let position = Position::new(row, col);
                    let result = facility.check_in(class, plate.clone(), row, col);

                    if row >= ROWS || col >= COLS {
                        let is_out_of_bounds = matches!(result, Err(ParkingError::OutOfBounds { .. }));
                        prop_assert!(is_out_of_bounds);
                    } else if model.values().any(|p| *p == plate) {
                        prop_assert_eq!(result, Err(ParkingError::DuplicatePlate(plate)));
                    } else if model.contains_key(&position) {
                        prop_assert_eq!(result, Err(ParkingError::SpotOccupied(position)));
                    } else {
                        prop_assert!(result.is_ok());
                        model.insert(position, plate);
                    }
                }
                Op::CheckOut { row, col } => {
                    let position = Position::new(row, col);
                    let result = facility.check_out(row, col);

                    if row >= ROWS || col >= COLS {
                        let is_out_of_bounds = matches!(result, Err(ParkingError::OutOfBounds { .. }));
                        prop_assert!(is_out_of_bounds);
                    } else if let Some(plate) = model.remove(&position) {
                        let receipt = result.unwrap();
                        prop_assert_eq!(receipt.plate, plate);
                    } else {
                        prop_assert_eq!(result.err(), Some(ParkingError::SpotEmpty(position)));
                    }
                }
                Op::Advance(minutes) => clock.advance_minutes(minutes),
            }

            prop_assert!(facility.is_consistent());
            prop_assert_eq!(facility.occupied_count(), model.len());
            prop_assert_eq!(facility.available_spots(), ROWS * COLS - model.len());
        }

        for (position, plate) in &model {
            let info = facility.view_by_plate(plate.as_str()).unwrap();
            prop_assert_eq!(info.position, *position);
        }
    }

    /// Check-in immediately followed by view-by-spot returns what was parked.
    #[test]
    fn check_in_then_view_by_spot(row in 0..ROWS, col in 0..COLS, plate in "[A-Z0-9]{1,8}") {
        let mut facility = Facility::new(ROWS, COLS).unwrap();
        facility.check_in(VehicleClass::Truck, plate.as_str(), row, col).unwrap();

        let info = facility.view_by_spot(row, col).unwrap();
        prop_assert_eq!(info.plate.as_str(), plate.as_str());
        prop_assert_eq!(info.vehicle_class, VehicleClass::Truck);
    }

    /// The fare grows with time at the hourly rate and never loses cents.
    #[test]
    fn fare_is_base_plus_hourly(minutes in 0i64..100_000) {
        let clock = ManualClock::new(Timestamp::from_secs(0));
        let mut facility = Facility::with_clock(1, 1, &clock).unwrap();
        facility.check_in(VehicleClass::Car, "F", 0, 0).unwrap();
        clock.advance_minutes(minutes);

        let receipt = facility.check_out(0, 0).unwrap();
        let expected = calculate_fare(minutes as f64 / 60.0);
        prop_assert!((receipt.fare - expected).abs() < 1e-9);
        prop_assert!(receipt.fare >= 400.0);
        // Two decimals at most.
        let cents = receipt.fare * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }
}
