//! # Facility
//!
//! The parking facility model: a fixed grid of spots plus a registry of the
//! vehicles parked in it.
//!
//! ## Invariants
//!
//! - A plate appears in at most one cell.
//! - A plate is in the registry iff it appears in a cell, and the record's
//!   position is that cell.
//! - `occupied == rows * cols - empty cells`.
//!
//! Every mutating operation validates all of its preconditions before it
//! touches any state, so a failed call leaves the facility unchanged.

use crate::clock::{Clock, SystemClock};
use crate::fare::{FareSchedule, hours_between};
use crate::snapshot::{GridSnapshot, SpotView};
use crate::types::{
    CheckInReceipt, CheckOutReceipt, OccupancyRecord, ParkingError, Plate, Position,
    VehicleClass, VehicleInfo,
};
use std::collections::BTreeMap;

/// A fixed-size grid parking facility.
///
/// Uses `BTreeMap` for the registry so listings are ordered by plate.
#[derive(Debug, Clone)]
pub struct Facility<C: Clock = SystemClock> {
    rows: usize,
    cols: usize,

    /// Row-major cells: `grid[row * cols + col]`.
    grid: Vec<Option<Plate>>,

    /// Number of `Some` cells in `grid`.
    occupied: usize,

    /// Plate -> record of the vehicle holding it.
    registry: BTreeMap<Plate, OccupancyRecord>,

    fare_schedule: FareSchedule,
    clock: C,
}

impl Facility<SystemClock> {
    /// Create an empty facility timed by the host clock.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ParkingError> {
        Self::with_clock(rows, cols, SystemClock)
    }
}

impl<C: Clock> Facility<C> {
    /// Create an empty facility timed by `clock`.
    ///
    /// Both dimensions must be positive.
    pub fn with_clock(rows: usize, cols: usize, clock: C) -> Result<Self, ParkingError> {
        let capacity = rows
            .checked_mul(cols)
            .filter(|&n| n > 0)
            .ok_or(ParkingError::InvalidDimensions { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            grid: vec![None; capacity],
            occupied: 0,
            registry: BTreeMap::new(),
            fare_schedule: FareSchedule::default(),
            clock,
        })
    }

    /// Replace the fare schedule.
    #[must_use]
    pub fn with_fare_schedule(mut self, fare_schedule: FareSchedule) -> Self {
        self.fare_schedule = fare_schedule;
        self
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of spots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn available_spots(&self) -> usize {
        self.capacity() - self.occupied
    }

    #[must_use]
    pub fn fare_schedule(&self) -> &FareSchedule {
        &self.fare_schedule
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// All parked vehicles, ordered by plate.
    pub fn vehicles(&self) -> impl Iterator<Item = VehicleInfo> + '_ {
        self.registry
            .iter()
            .map(|(plate, record)| VehicleInfo::from_record(plate, record))
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Park a vehicle at `(row, col)`.
    ///
    /// Checks, in order: bounds, duplicate plate, spot occupancy. A duplicate
    /// plate is rejected even when the target spot is free.
    pub fn check_in(
        &mut self,
        vehicle_class: VehicleClass,
        plate: impl Into<Plate>,
        row: usize,
        col: usize,
    ) -> Result<CheckInReceipt, ParkingError> {
        let plate = plate.into();
        let position = Position::new(row, col);
        let idx = self.index(position)?;

        if self.registry.contains_key(&plate) {
            return Err(ParkingError::DuplicatePlate(plate));
        }
        if self.grid[idx].is_some() {
            return Err(ParkingError::SpotOccupied(position));
        }

        let entry_time = self.clock.now();
        self.grid[idx] = Some(plate.clone());
        self.occupied += 1;
        self.registry.insert(
            plate.clone(),
            OccupancyRecord {
                vehicle_class,
                entry_time,
                position,
            },
        );

        Ok(CheckInReceipt {
            plate,
            vehicle_class,
            position,
            entry_time,
            available_spots: self.available_spots(),
        })
    }

    /// Remove the vehicle at `(row, col)` and price its stay.
    pub fn check_out(&mut self, row: usize, col: usize) -> Result<CheckOutReceipt, ParkingError> {
        let position = Position::new(row, col);
        let idx = self.index(position)?;
        let (plate, record) = self.occupant(idx, position)?;

        let exit_time = self.clock.now();
        let elapsed_hours = hours_between(record.entry_time, exit_time);
        let fare = self.fare_schedule.fare(elapsed_hours);
        let vehicle_class = record.vehicle_class;
        let entry_time = record.entry_time;
        let plate = plate.clone();

        self.registry.remove(&plate);
        self.grid[idx] = None;
        self.occupied -= 1;

        Ok(CheckOutReceipt {
            plate,
            vehicle_class,
            position,
            entry_time,
            exit_time,
            elapsed_hours,
            fare,
            available_spots: self.available_spots(),
        })
    }

    /// The vehicle parked at `(row, col)`.
    pub fn view_by_spot(&self, row: usize, col: usize) -> Result<VehicleInfo, ParkingError> {
        let position = Position::new(row, col);
        let idx = self.index(position)?;
        let (plate, record) = self.occupant(idx, position)?;
        Ok(VehicleInfo::from_record(plate, record))
    }

    /// The vehicle with the given plate.
    pub fn view_by_plate(&self, plate: &str) -> Result<VehicleInfo, ParkingError> {
        self.registry
            .get_key_value(plate)
            .map(|(plate, record)| VehicleInfo::from_record(plate, record))
            .ok_or_else(|| ParkingError::NotFound(Plate::new(plate)))
    }

    /// A read-only copy of every spot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        let cells = self
            .grid
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => SpotView::Empty,
                        Some(plate) => SpotView::Occupied {
                            plate: plate.clone(),
                            initial: self
                                .registry
                                .get(plate)
                                .map(|r| r.vehicle_class.initial())
                                .unwrap_or('?'),
                        },
                    })
                    .collect()
            })
            .collect();

        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            available_spots: self.available_spots(),
            cells,
        }
    }

    /// Re-check every grid/registry invariant.
    ///
    /// Operations maintain these on their own; this exists for tests and
    /// diagnostics.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut counted = 0;
        for (idx, cell) in self.grid.iter().enumerate() {
            let Some(plate) = cell else { continue };
            counted += 1;
            let here = Position::new(idx / self.cols, idx % self.cols);
            match self.registry.get(plate) {
                Some(record) if record.position == here => {}
                _ => return false,
            }
        }
        counted == self.occupied && self.registry.len() == self.occupied
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Grid index of `position`, or `OutOfBounds`.
    fn index(&self, position: Position) -> Result<usize, ParkingError> {
        if position.row < self.rows && position.col < self.cols {
            Ok(position.row * self.cols + position.col)
        } else {
            Err(ParkingError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The plate in cell `idx` together with its record.
    fn occupant(
        &self,
        idx: usize,
        position: Position,
    ) -> Result<(&Plate, &OccupancyRecord), ParkingError> {
        let plate = self.grid[idx]
            .as_ref()
            .ok_or(ParkingError::SpotEmpty(position))?;
        match self.registry.get(plate) {
            Some(record) if record.position == position => Ok((plate, record)),
            _ => Err(ParkingError::RegistryMismatch {
                position,
                plate: plate.clone(),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
