//! # Application Errors

use parklot_core::ParkingError;
use thiserror::Error;

/// Errors that stop a CLI command.
///
/// Facility errors raised inside the interactive menu never reach this type;
/// the menu reports them and keeps going.
#[derive(Debug, Error)]
pub enum AppError {
    /// The facility rejected an operation or could not be built.
    #[error(transparent)]
    Parking(#[from] ParkingError),

    /// The configuration file is missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the terminal or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
