//! Parsing of attendant keyboard input.
//!
//! Every parser takes one raw line and returns `None` when the line is not a
//! valid answer; the menu turns that into a message instead of crashing.

use parklot_core::VehicleClass;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddVehicle,
    RemoveVehicle,
    ViewBySpot,
    ViewByPlate,
    DisplayLot,
    Exit,
}

impl MenuChoice {
    /// Menu entries with their labels, in display order.
    pub const ENTRIES: [(Self, &'static str); 6] = [
        (Self::AddVehicle, "Add Vehicle"),
        (Self::RemoveVehicle, "Remove Vehicle"),
        (Self::ViewBySpot, "View Vehicle Info by Spot"),
        (Self::ViewByPlate, "View Vehicle Info by Plate Number"),
        (Self::DisplayLot, "Display Parking Lot"),
        (Self::Exit, "Exit"),
    ];

    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let n: usize = line.trim().parse().ok()?;
        Self::ENTRIES.get(n.checked_sub(1)?).map(|(choice, _)| *choice)
    }
}

/// Vehicle class by menu number (1=Car, 2=Truck, 3=Motorcycle).
#[must_use]
pub fn parse_class(line: &str) -> Option<VehicleClass> {
    VehicleClass::from_menu(line.trim().parse().ok()?)
}

/// A zero-based row or column. Negative numbers are not indices.
#[must_use]
pub fn parse_index(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

/// A plate with surrounding whitespace removed. Blank plates are rejected.
#[must_use]
pub fn parse_plate(line: &str) -> Option<&str> {
    let plate = line.trim();
    (!plate.is_empty()).then_some(plate)
}
