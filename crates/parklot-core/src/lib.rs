//! # parklot-core
//!
//! The in-memory parking facility model for Parklot - THE LOGIC.
//!
//! A `Facility` owns a fixed grid of spots and a registry of the vehicles
//! parked in it. It supports check-in, check-out with fare computation, and
//! lookups by spot or by plate.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where facility state lives
//! - Never prints; every operation returns plain data or a `ParkingError`
//! - Reads time only through its `Clock`
//! - Has NO async, NO I/O, NO logging dependencies (pure Rust)
//!
//! ## Example
//!
//! ```
//! use parklot_core::{Facility, ParkingError, VehicleClass};
//!
//! let mut lot = Facility::new(3, 3)?;
//! lot.check_in(VehicleClass::Car, "X1", 2, 2)?;
//! assert_eq!(lot.available_spots(), 8);
//!
//! let receipt = lot.check_out(2, 2)?;
//! assert_eq!(receipt.available_spots, 9);
//! assert!(matches!(lot.view_by_plate("X1"), Err(ParkingError::NotFound(_))));
//! # Ok::<(), ParkingError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod clock;
pub mod facility;
pub mod fare;
pub mod snapshot;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use clock::{Clock, ManualClock, SystemClock};
pub use facility::Facility;
pub use fare::{
    DEFAULT_BASE_RATE, DEFAULT_HOURLY_RATE, FareSchedule, NegativeElapsed, calculate_fare,
    hours_between,
};
pub use snapshot::{GridSnapshot, SpotView};
pub use types::{
    CheckInReceipt, CheckOutReceipt, OccupancyRecord, ParkingError, Plate, Position, Timestamp,
    VehicleClass, VehicleInfo,
};
