//! # Core Type Definitions
//!
//! This module contains the plain-data types of the Parklot facility model:
//! - Identifiers and coordinates (`Plate`, `Position`)
//! - Vehicle classification (`VehicleClass`)
//! - Time (`Timestamp`)
//! - The per-vehicle record and its public views (`OccupancyRecord`, `VehicleInfo`)
//! - Error types (`ParkingError`)
//!
//! Every type here is `Serialize`/`Deserialize` so the application layer can
//! emit results as JSON without re-shaping them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS & COORDINATES
// =============================================================================

/// A vehicle's licence plate. The registry key of a facility.
///
/// Plates are compared byte-for-byte; no normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Create a plate from any string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the plate as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Plate {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Plate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Plate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A spot coordinate. Zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// =============================================================================
// VEHICLE CLASS
// =============================================================================

/// Categorical type of a parked vehicle. Display-only: the fare rule does
/// not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Car,
    Truck,
    Motorcycle,
}

impl VehicleClass {
    /// All classes in menu order.
    pub const ALL: [Self; 3] = [Self::Car, Self::Truck, Self::Motorcycle];

    /// Resolve the attendant menu number (1=Car, 2=Truck, 3=Motorcycle).
    #[must_use]
    pub const fn from_menu(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Car),
            2 => Some(Self::Truck),
            3 => Some(Self::Motorcycle),
            _ => None,
        }
    }

    /// The attendant menu number for this class.
    #[must_use]
    pub const fn menu_number(self) -> u32 {
        match self {
            Self::Car => 1,
            Self::Truck => 2,
            Self::Motorcycle => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Truck => "Truck",
            Self::Motorcycle => "Motorcycle",
        }
    }

    /// First letter of the class name, used by grid renderings.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Car => 'C',
            Self::Truck => 'T',
            Self::Motorcycle => 'M',
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TIME
// =============================================================================

/// Milliseconds per hour.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

const SECONDS_PER_DAY: i64 = 86_400;

/// A wall-clock instant in milliseconds since the Unix epoch.
///
/// Negative values are instants before the epoch. They only arise from a
/// badly set host clock but are carried through unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Signed milliseconds from `earlier` to `self`.
    #[must_use]
    pub const fn millis_since(self, earlier: Self) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Shift by a signed number of milliseconds using saturating arithmetic.
    #[must_use]
    pub const fn offset_millis(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Whole seconds elapsed since midnight UTC of this instant's day.
    #[must_use]
    pub const fn seconds_of_day(self) -> u32 {
        self.0.div_euclid(1000).rem_euclid(SECONDS_PER_DAY) as u32
    }

    /// Time of day as `HH:MM:SS` (UTC).
    #[must_use]
    pub fn hms(self) -> String {
        let secs = self.seconds_of_day();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

// =============================================================================
// OCCUPANCY RECORD
// =============================================================================

/// What the facility knows about one parked vehicle.
///
/// Owned exclusively by the facility registry, keyed by plate. A record
/// exists exactly as long as its grid cell holds the plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    pub vehicle_class: VehicleClass,
    pub entry_time: Timestamp,
    pub position: Position,
}

/// Owned view of a parked vehicle returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub plate: Plate,
    pub vehicle_class: VehicleClass,
    pub entry_time: Timestamp,
    pub position: Position,
}

impl VehicleInfo {
    #[must_use]
    pub fn from_record(plate: &Plate, record: &OccupancyRecord) -> Self {
        Self {
            plate: plate.clone(),
            vehicle_class: record.vehicle_class,
            entry_time: record.entry_time,
            position: record.position,
        }
    }
}

/// Result of a successful check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInReceipt {
    pub plate: Plate,
    pub vehicle_class: VehicleClass,
    pub position: Position,
    pub entry_time: Timestamp,
    /// Spots still free after this vehicle was parked.
    pub available_spots: usize,
}

/// Result of a successful check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutReceipt {
    pub plate: Plate,
    pub vehicle_class: VehicleClass,
    pub position: Position,
    pub entry_time: Timestamp,
    pub exit_time: Timestamp,
    pub elapsed_hours: f64,
    pub fare: f64,
    /// Spots free after this vehicle left.
    pub available_spots: usize,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors returned by facility operations.
///
/// - All variants are recoverable user-input errors
/// - A failed operation leaves the facility unchanged
/// - The CORE never panics on caller-supplied input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// A facility needs at least one row and one column.
    #[error("Invalid facility dimensions: {rows} x {cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The coordinate lies outside the grid.
    #[error("Spot {position} is outside the lot ({rows} x {cols})")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// The target spot already holds a vehicle.
    #[error("Spot {0} is already occupied")]
    SpotOccupied(Position),

    /// The plate is already parked somewhere in the facility.
    #[error("Duplicate plate number: {0}")]
    DuplicatePlate(Plate),

    /// No vehicle is parked in the target spot.
    #[error("No vehicle parked in spot {0}")]
    SpotEmpty(Position),

    /// No vehicle with this plate is parked.
    #[error("No vehicle with plate number '{0}' found")]
    NotFound(Plate),

    /// Grid and registry disagree about a spot.
    #[error("Registry mismatch at spot {position} for plate '{plate}'")]
    RegistryMismatch { position: Position, plate: Plate },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_class_menu_mapping() {
        for class in VehicleClass::ALL {
            assert_eq!(VehicleClass::from_menu(class.menu_number()), Some(class));
        }
        assert_eq!(VehicleClass::from_menu(0), None);
        assert_eq!(VehicleClass::from_menu(4), None);
    }

    #[test]
    fn vehicle_class_initials() {
        assert_eq!(VehicleClass::Car.initial(), 'C');
        assert_eq!(VehicleClass::Truck.initial(), 'T');
        assert_eq!(VehicleClass::Motorcycle.initial(), 'M');
    }

    #[test]
    fn timestamp_hms() {
        // 1970-01-02 13:05:09 UTC
        let ts = Timestamp::from_secs(86_400 + 13 * 3600 + 5 * 60 + 9);
        assert_eq!(ts.hms(), "13:05:09");
        assert_eq!(Timestamp::from_millis(999).hms(), "00:00:00");
    }

    #[test]
    fn timestamp_hms_before_epoch() {
        // One second before the epoch is 23:59:59 of the previous day.
        assert_eq!(Timestamp::from_millis(-1000).hms(), "23:59:59");
        assert_eq!(Timestamp::from_millis(-1).hms(), "23:59:59");
    }

    #[test]
    fn timestamp_millis_since_is_signed() {
        let a = Timestamp::from_secs(100);
        let b = Timestamp::from_secs(160);
        assert_eq!(b.millis_since(a), 60_000);
        assert_eq!(a.millis_since(b), -60_000);
    }

    #[test]
    fn plate_serializes_as_string() {
        let json = serde_json::to_string(&Plate::new("KA01")).expect("serialize");
        assert_eq!(json, "\"KA01\"");
    }

    #[test]
    fn error_messages_name_the_spot() {
        let err = ParkingError::OutOfBounds {
            position: Position::new(12, 3),
            rows: 10,
            cols: 10,
        };
        assert_eq!(err.to_string(), "Spot (12, 3) is outside the lot (10 x 10)");
    }
}
