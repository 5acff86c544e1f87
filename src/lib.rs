//! Frequency calibration: sum a list of frequency changes, and find the first
//! frequency reached twice when the changes are applied over and over.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod calibrate;
pub mod changes;
pub mod running;

pub use calibrate::{first_repeat, total};
pub use changes::{parse_change, parse_changes, read_changes, DEFAULT_INPUT};

/// Errors in the calibration data itself. I/O failures are reported
/// separately, as `failure::Error`.
#[derive(Debug, Fail, Clone, Eq, PartialEq)]
pub enum CalibrationError {
    #[fail(display = "line {}: bad frequency change: {:?}", line, text)]
    BadChange { line: usize, text: String },

    #[fail(display = "no frequency changes in input")]
    EmptyInput,

    #[fail(display = "running total overflowed after {} steps", steps)]
    Overflow { steps: usize },
}
