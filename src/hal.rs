//! Peripheral capabilities the decoder is driven through.

use embedded_hal::digital::{InputPin, OutputPin};

/// Direction of the sensor data line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// A bidirectional GPIO line connected to the sensor's data pin.
///
/// Levels are read and written through the `embedded-hal` pin traits; the
/// direction switch is the one operation those traits do not cover.
pub trait DataLine: InputPin + OutputPin {
    /// Switches the line between driving and sensing.
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;
}

impl<T: DataLine + ?Sized> DataLine for &mut T {
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        T::set_direction(self, direction)
    }
}

/// A free-running hardware counter, see [`crate::timing`] for its resolution.
pub trait TickTimer {
    /// Restarts counting from zero.
    fn reset(&mut self);

    /// Ticks elapsed since the last [`reset`](TickTimer::reset).
    fn ticks(&mut self) -> u8;
}

impl<T: TickTimer + ?Sized> TickTimer for &mut T {
    fn reset(&mut self) {
        T::reset(self)
    }

    fn ticks(&mut self) -> u8 {
        T::ticks(self)
    }
}
