//! Line-oriented text log written to the serial port.
//!
//! ```text
//! I: iteration 7
//! D: 00100011 00000000 00011001 00000000 00111100 ok
//! H: 35.0
//! T: 25.0
//! ```
//!
//! A failed read is a single `E:` line naming the wait phase.

use core::fmt::{self, Write};

use crate::format::Binary8;
use crate::frame::SensorFrame;

/// Boot banner, written once.
pub fn start<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("I: start\n")
}

pub fn iteration<W: Write>(out: &mut W, iteration: u32) -> fmt::Result {
    writeln!(out, "I: iteration {iteration}")
}

/// Raw bits of every byte, the checksum verdict, then humidity and temperature.
///
/// Data lines are written even when the checksum is bad.
pub fn frame<W: Write>(out: &mut W, frame: &SensorFrame) -> fmt::Result {
    out.write_str("D: ")?;
    for byte in frame.bytes() {
        write!(out, "{} ", Binary8(*byte))?;
    }
    writeln!(out, "{}", frame.verdict())?;

    writeln!(out, "H: {}", frame.humidity())?;
    writeln!(out, "T: {}", frame.temperature())
}

pub fn error<W: Write, E: fmt::Display>(out: &mut W, error: &E) -> fmt::Result {
    writeln!(out, "E: {error}")
}
