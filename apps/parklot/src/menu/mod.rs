//! # Attendant Menu
//!
//! The interactive console driver: a numbered menu that collects requests,
//! hands them to the facility, and prints the results.
//!
//! ```text
//! 1. Add Vehicle
//! 2. Remove Vehicle
//! 3. View Vehicle Info by Spot
//! 4. View Vehicle Info by Plate Number
//! 5. Display Parking Lot
//! 6. Exit
//! ```
//!
//! The menu owns no facility state. It borrows the facility for the length
//! of the session and is generic over its input and output so tests can drive
//! it with in-memory buffers. Facility errors are reported and the loop goes
//! on; only I/O errors end the session early. End of input exits cleanly.

pub mod input;
pub mod render;

use input::{MenuChoice, parse_class, parse_index, parse_plate};
use parklot_core::{Clock, Facility, ParkingError, Position};
use render::Report;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Whether the session continues after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Output style for results. Prompts are always plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    /// One JSON object per result line.
    Json,
}

/// An attendant session over one facility.
pub struct Menu<'f, C: Clock, R, W> {
    facility: &'f mut Facility<C>,
    input: R,
    output: W,
    mode: OutputMode,
    checkin_pause: Duration,
    utc_offset_minutes: i32,
}

impl<'f, C: Clock, R: BufRead, W: Write> Menu<'f, C, R, W> {
    pub fn new(facility: &'f mut Facility<C>, input: R, output: W) -> Self {
        Self {
            facility,
            input,
            output,
            mode: OutputMode::Text,
            checkin_pause: Duration::ZERO,
            utc_offset_minutes: 0,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pause after each successful check-in.
    #[must_use]
    pub fn with_checkin_pause(mut self, pause: Duration) -> Self {
        self.checkin_pause = pause;
        self
    }

    /// Show entry and exit times shifted from UTC by this many minutes.
    #[must_use]
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Hand back the output sink, e.g. to inspect a test buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the attendant exits or input ends.
    pub fn run(&mut self) -> std::io::Result<()> {
        tracing::debug!(
            rows = self.facility.rows(),
            cols = self.facility.cols(),
            "attendant session started"
        );

        loop {
            for (n, (_, label)) in MenuChoice::ENTRIES.iter().enumerate() {
                writeln!(self.output, "{}. {}", n + 1, label)?;
            }
            let Some(line) = self.prompt(">")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::AddVehicle) => self.add_vehicle()?,
                Some(MenuChoice::RemoveVehicle) => self.remove_vehicle()?,
                Some(MenuChoice::ViewBySpot) => self.view_by_spot()?,
                Some(MenuChoice::ViewByPlate) => self.view_by_plate()?,
                Some(MenuChoice::DisplayLot) => {
                    self.show_lot()?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Quit,
                None => {
                    self.invalid("Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        match self.mode {
            OutputMode::Text => writeln!(self.output, "Exiting...")?,
            OutputMode::Json => self.output.write_all(Report::Exit.to_line().as_bytes())?,
        }
        self.output.flush()?;
        tracing::debug!(
            parked = self.facility.occupied_count(),
            "attendant session ended"
        );
        Ok(())
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    fn add_vehicle(&mut self) -> std::io::Result<Flow> {
        writeln!(self.output, "Enter Vehicle Type:")?;
        writeln!(self.output, "1. Car")?;
        writeln!(self.output, "2. Truck")?;
        writeln!(self.output, "3. Motorcycle")?;
        let Some(line) = self.prompt(">")? else {
            return Ok(Flow::Quit);
        };
        let Some(class) = parse_class(&line) else {
            self.invalid("Invalid vehicle type.")?;
            return Ok(Flow::Continue);
        };

        self.show_lot()?;
        let Some(line) = self.prompt("Enter New Vehicle Plate Number:\n>")? else {
            return Ok(Flow::Quit);
        };
        let Some(plate) = parse_plate(&line).map(str::to_owned) else {
            self.invalid("Plate number cannot be empty.")?;
            return Ok(Flow::Continue);
        };
        let Some(position) = self.ask_position("Park In")? else {
            return Ok(Flow::Quit);
        };
        let Some(Position { row, col }) = position else {
            return Ok(Flow::Continue);
        };

        match self.facility.check_in(class, plate, row, col) {
            Ok(receipt) => {
                tracing::info!(
                    plate = %receipt.plate,
                    class = %receipt.vehicle_class,
                    row,
                    col,
                    available = receipt.available_spots,
                    "vehicle checked in"
                );
                match self.mode {
                    OutputMode::Text => write!(
                        self.output,
                        "{}",
                        render::checked_in(&receipt, self.utc_offset_minutes)
                    )?,
                    OutputMode::Json => self.emit(&Report::CheckedIn(&receipt))?,
                }
                self.output.flush()?;
                if !self.checkin_pause.is_zero() {
                    std::thread::sleep(self.checkin_pause);
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_vehicle(&mut self) -> std::io::Result<Flow> {
        self.show_lot()?;
        let Some(position) = self.ask_position("Remove Vehicle From")? else {
            return Ok(Flow::Quit);
        };
        let Some(Position { row, col }) = position else {
            return Ok(Flow::Continue);
        };

        match self.facility.check_out(row, col) {
            Ok(receipt) => {
                tracing::info!(
                    plate = %receipt.plate,
                    row,
                    col,
                    hours = receipt.elapsed_hours,
                    fare = receipt.fare,
                    available = receipt.available_spots,
                    "vehicle checked out"
                );
                match self.mode {
                    OutputMode::Text => write!(
                        self.output,
                        "{}",
                        render::checked_out(&receipt, self.utc_offset_minutes)
                    )?,
                    OutputMode::Json => self.emit(&Report::CheckedOut(&receipt))?,
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_by_spot(&mut self) -> std::io::Result<Flow> {
        self.show_lot()?;
        let Some(position) = self.ask_position("View Vehicle Info")? else {
            return Ok(Flow::Quit);
        };
        let Some(Position { row, col }) = position else {
            return Ok(Flow::Continue);
        };

        match self.facility.view_by_spot(row, col) {
            Ok(info) => match self.mode {
                OutputMode::Text => write!(
                    self.output,
                    "{}",
                    render::vehicle_at_spot(&info, self.utc_offset_minutes)
                )?,
                OutputMode::Json => self.emit(&Report::Vehicle(&info))?,
            },
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_by_plate(&mut self) -> std::io::Result<Flow> {
        let Some(line) = self.prompt("Enter Vehicle Plate Number to Search:\n>")? else {
            return Ok(Flow::Quit);
        };
        let Some(plate) = parse_plate(&line) else {
            self.invalid("Plate number cannot be empty.")?;
            return Ok(Flow::Continue);
        };

        match self.facility.view_by_plate(plate) {
            Ok(info) => match self.mode {
                OutputMode::Text => write!(
                    self.output,
                    "{}",
                    render::vehicle_found(&info, self.utc_offset_minutes)
                )?,
                OutputMode::Json => self.emit(&Report::Vehicle(&info))?,
            },
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_lot(&mut self) -> std::io::Result<()> {
        let snapshot = self.facility.snapshot();
        match self.mode {
            OutputMode::Text => {
                write!(self.output, "{}", render::lot(&snapshot))?;
                write!(self.output, "{}", render::available(snapshot.available_spots))
            }
            OutputMode::Json => self.emit(&Report::Lot(&snapshot)),
        }
    }

    // =========================================================================
    // PROMPTS & OUTPUT
    // =========================================================================

    /// Print `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a row and a column.
    ///
    /// Outer `None` means input ended; inner `None` means the answer was not
    /// a valid index and has already been reported.
    fn ask_position(&mut self, action: &str) -> std::io::Result<Option<Option<Position>>> {
        let Some(row) = self.prompt(&format!("Select Row to {action}:\n>"))? else {
            return Ok(None);
        };
        let Some(col) = self.prompt(&format!("Select Space to {action}:\n>"))? else {
            return Ok(None);
        };
        match (parse_index(&row), parse_index(&col)) {
            (Some(row), Some(col)) => Ok(Some(Some(Position::new(row, col)))),
            _ => {
                self.invalid("Invalid input.")?;
                Ok(Some(None))
            }
        }
    }

    fn report_error(&mut self, error: &ParkingError) -> std::io::Result<()> {
        match error {
            ParkingError::RegistryMismatch { position, plate } => {
                tracing::warn!(%position, %plate, "grid and registry disagree");
            }
            _ => tracing::debug!(kind = render::error_kind(error), "request rejected"),
        }
        match self.mode {
            OutputMode::Text => writeln!(self.output, "{}", render::error_message(error)),
            OutputMode::Json => self.emit(&Report::error(error)),
        }
    }

    fn invalid(&mut self, message: &str) -> std::io::Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.output, "{message}"),
            OutputMode::Json => self.emit(&Report::InvalidInput { message }),
        }
    }

    fn emit(&mut self, report: &Report<'_>) -> std::io::Result<()> {
        self.output.write_all(report.to_line().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot_core::{ManualClock, Timestamp};

    fn session(facility: &mut Facility<&ManualClock>, script: &str) -> String {
        let mut menu = Menu::new(facility, script.as_bytes(), Vec::new());
        menu.run().expect("session");
        String::from_utf8(menu.into_output()).expect("utf8")
    }

    #[test]
    fn exit_immediately() {
        let clock = ManualClock::default();
        let mut facility = Facility::with_clock(2, 2, &clock).expect("facility");
        let out = session(&mut facility, "6\n");
        assert!(out.starts_with("1. Add Vehicle\n2. Remove Vehicle\n"));
        assert!(out.ends_with(">Exiting...\n"));
    }

    #[test]
    fn end_of_input_mid_prompt_exits_cleanly() {
        let clock = ManualClock::default();
        let mut facility = Facility::with_clock(2, 2, &clock).expect("facility");
        let out = session(&mut facility, "1\n1\nAB12\n");
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(facility.occupied_count(), 0);
    }

    #[test]
    fn bad_menu_choice_keeps_going() {
        let clock = ManualClock::default();
        let mut facility = Facility::with_clock(2, 2, &clock).expect("facility");
        let out = session(&mut facility, "9\nabc\n6\n");
        assert_eq!(out.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn negative_row_is_invalid_input() {
        let clock = ManualClock::new(Timestamp::from_secs(0));
        let mut facility = Facility::with_clock(2, 2, &clock).expect("facility");
        let out = session(&mut facility, "1\n1\nAB12\n-1\n0\n6\n");
        assert!(out.contains("Invalid input."));
        assert_eq!(facility.occupied_count(), 0);
    }
}
