//! Text and JSON renderings of facility results.
//!
//! All functions are pure: they build strings and leave writing to the menu.

use parklot_core::{
    CheckInReceipt, CheckOutReceipt, GridSnapshot, ParkingError, SpotView, Timestamp,
    VehicleInfo,
};
use serde::Serialize;

const FRAME: &str = "|-------------------|";

/// Width of the text inside one rendered spot.
pub const SPOT_WIDTH: usize = 10;

// =============================================================================
// TEXT
// =============================================================================

/// The framed lot picture: `[C(PLATE)   ]` per occupied spot, blank
/// brackets per empty one.
#[must_use]
pub fn lot(snapshot: &GridSnapshot) -> String {
    let mut out = String::new();
    out.push_str(FRAME);
    out.push('\n');
    for row in &snapshot.cells {
        out.push('|');
        for spot in row {
            let text = match spot {
                SpotView::Empty => String::new(),
                SpotView::Occupied { plate, initial } => format!("{initial}({plate})"),
            };
            out.push_str(&format!("[{text:<SPOT_WIDTH$}]"));
        }
        out.push_str("|\n");
    }
    out.push_str(FRAME);
    out.push('\n');
    out
}

#[must_use]
pub fn available(count: usize) -> String {
    format!("SPOTS AVAILABLE: {count}\n")
}

/// Currency display, e.g. `Rs. 550.00`.
#[must_use]
pub fn money(fare: f64) -> String {
    format!("Rs. {fare:.2}")
}

/// Time of day of `at` as `HH:MM:SS`, shifted from UTC by the display offset.
#[must_use]
pub fn clock_time(at: Timestamp, utc_offset_minutes: i32) -> String {
    at.offset_millis(i64::from(utc_offset_minutes) * 60_000).hms()
}

#[must_use]
pub fn checked_in(receipt: &CheckInReceipt, utc_offset_minutes: i32) -> String {
    format!(
        "Vehicle Added to Lot!\nTime Entered: {}\n{}",
        clock_time(receipt.entry_time, utc_offset_minutes),
        available(receipt.available_spots)
    )
}

#[must_use]
pub fn checked_out(receipt: &CheckOutReceipt, utc_offset_minutes: i32) -> String {
    format!(
        "Vehicle Removed from Lot!\nTime Exited: {}\nFare: {}\n{}",
        clock_time(receipt.exit_time, utc_offset_minutes),
        money(receipt.fare),
        available(receipt.available_spots)
    )
}

#[must_use]
pub fn vehicle_at_spot(info: &VehicleInfo, utc_offset_minutes: i32) -> String {
    format!(
        "Vehicle Type: {}\nPlate Number: {}\nEntry Time: {}\n",
        info.vehicle_class,
        info.plate,
        clock_time(info.entry_time, utc_offset_minutes)
    )
}

#[must_use]
pub fn vehicle_found(info: &VehicleInfo, utc_offset_minutes: i32) -> String {
    format!(
        "Vehicle Found!\n{}Parked at Row: {}, Column: {}\n",
        vehicle_at_spot(info, utc_offset_minutes),
        info.position.row,
        info.position.col
    )
}

/// One human-readable line per facility error.
#[must_use]
pub fn error_message(error: &ParkingError) -> String {
    match error {
        ParkingError::SpotOccupied(_) => "Spot is already occupied.".to_string(),
        ParkingError::DuplicatePlate(_) => {
            "Duplicate plate number. Vehicle cannot be added.".to_string()
        }
        ParkingError::SpotEmpty(_) => "No vehicle parked in that spot.".to_string(),
        ParkingError::NotFound(plate) => {
            format!("No vehicle with plate number '{plate}' found.")
        }
        ParkingError::OutOfBounds {
            position,
            rows,
            cols,
        } => format!("Spot {position} is outside the lot ({rows} x {cols})."),
        ParkingError::RegistryMismatch { position, .. } => {
            format!("Lot records are inconsistent for spot {position}.")
        }
        ParkingError::InvalidDimensions { rows, cols } => {
            format!("A lot of {rows} x {cols} spots cannot be built.")
        }
    }
}

/// Stable machine-readable name of an error.
#[must_use]
pub fn error_kind(error: &ParkingError) -> &'static str {
    match error {
        ParkingError::InvalidDimensions { .. } => "invalid_dimensions",
        ParkingError::OutOfBounds { .. } => "out_of_bounds",
        ParkingError::SpotOccupied(_) => "spot_occupied",
        ParkingError::DuplicatePlate(_) => "duplicate_plate",
        ParkingError::SpotEmpty(_) => "spot_empty",
        ParkingError::NotFound(_) => "not_found",
        ParkingError::RegistryMismatch { .. } => "registry_mismatch",
    }
}

// =============================================================================
// JSON
// =============================================================================

/// One result line in `--json-mode`.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Report<'a> {
    CheckedIn(&'a CheckInReceipt),
    CheckedOut(&'a CheckOutReceipt),
    Vehicle(&'a VehicleInfo),
    Lot(&'a GridSnapshot),
    Error {
        kind: &'static str,
        message: String,
    },
    InvalidInput {
        message: &'a str,
    },
    Exit,
}

impl Report<'_> {
    #[must_use]
    pub fn error(error: &ParkingError) -> Self {
        Self::Error {
            kind: error_kind(error),
            message: error_message(error),
        }
    }

    /// Compact single-line JSON followed by a newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_default();
        line.push('\n');
        line
    }
}
