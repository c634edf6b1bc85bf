//! # Grid Snapshot
//!
//! A read-only copy of the facility grid for rendering.

use crate::types::{Plate, Position};
use serde::{Deserialize, Serialize};

/// The state of one spot as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SpotView {
    Empty,
    Occupied {
        plate: Plate,
        /// Initial letter of the vehicle class (`C`, `T`, `M`).
        initial: char,
    },
}

impl SpotView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Every spot of the facility, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub available_spots: usize,
    /// `cells[row][col]`
    pub cells: Vec<Vec<SpotView>>,
}

impl GridSnapshot {
    /// The view of one spot, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&SpotView> {
        self.cells.get(position.row)?.get(position.col)
    }

    /// Iterate over `(position, view)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &SpotView)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, view)| (Position::new(row, col), view))
        })
    }
}
