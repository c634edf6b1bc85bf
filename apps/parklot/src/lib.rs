//! # Parklot
//!
//! The console application around `parklot-core`: CLI parsing, configuration,
//! and the interactive attendant menu.
//!
//! Exposed as a library so integration tests can drive the menu and load
//! configuration without spawning the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;

pub use config::Config;
pub use error::AppError;
pub use menu::{Menu, OutputMode};
