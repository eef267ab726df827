//! DHT11 Sensor Reader for Embedded Rust
//!
//! This crate reads a DHT11 temperature and humidity sensor by bit-banging its
//! single data line. Pulse widths are measured against a free-running tick
//! timer, and each reading is reported as text over a serial port.
//!
//! # Features
//! - Blocking synchronous decoder built on `embedded-hal` traits
//! - Typed timeouts naming the wait phase that failed
//! - Serial text log through [`core::fmt::Write`]
//! - Optional status LEDs mirroring the decoder phase
//! - Designed for `no_std` environments
//!
//! # Dependencies
//! This crate depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for the data line and status LEDs
//! - [`DelayNs`] for the start signal and the pacing between reads
//!
//! plus two of its own: [`DataLine`] for switching the data line direction and
//! [`TickTimer`] for the counter pulses are measured with.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and emits decoder diagnostics
//!
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod dht11;
pub mod error;
pub mod format;
pub mod frame;
pub mod hal;
pub mod monitor;
pub mod report;
pub mod status;
pub mod timing;

#[cfg(test)]
mod test_support;

pub use dht11::{Dht11, FrameSource};
pub use error::{DhtError, Stage};
pub use frame::{Measurement, SensorFrame, Verdict};
pub use hal::{DataLine, Direction, TickTimer};
pub use monitor::Monitor;
pub use status::{Phase, StatusIndicator, StatusLeds};
