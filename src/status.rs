//! Status indicators mirroring the decoder's current phase.

use embedded_hal::digital::OutputPin;

/// Phase shown on the status indicators.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Between reads and while receiving data bits.
    Idle,
    /// Holding the line low to request a reading.
    Start,
    /// Line released, waiting for the sensor to pull it low.
    Release,
    AwaitAckHigh,
    AwaitAckLow,
}

/// Something that can display the decoder's phase.
///
/// Indicators are for observation only and cannot fail a read.
pub trait StatusIndicator {
    fn show(&mut self, phase: Phase);
}

/// No indicators attached.
impl StatusIndicator for () {
    fn show(&mut self, _phase: Phase) {}
}

impl<T: StatusIndicator + ?Sized> StatusIndicator for &mut T {
    fn show(&mut self, phase: Phase) {
        T::show(self, phase)
    }
}

/// Three single-purpose LEDs.
pub struct StatusLeds<B, R, G> {
    blue: B,
    red: R,
    green: G,
}

impl<B, R, G> StatusLeds<B, R, G>
where
    B: OutputPin,
    R: OutputPin,
    G: OutputPin,
{
    pub fn new(blue: B, red: R, green: G) -> Self {
        StatusLeds { blue, red, green }
    }

    /// Gives back the LED pins.
    pub fn release(self) -> (B, R, G) {
        (self.blue, self.red, self.green)
    }

    /// Which of blue, red and green are lit for `phase`.
    fn pattern(phase: Phase) -> (bool, bool, bool) {
        match phase {
            Phase::Idle => (false, false, false),
            Phase::Start | Phase::AwaitAckLow => (true, false, false),
            Phase::AwaitAckHigh => (false, true, false),
            Phase::Release => (false, false, true),
        }
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    let result = if on { pin.set_high() } else { pin.set_low() };
    if result.is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("status: failed to drive LED");
    }
}

impl<B, R, G> StatusIndicator for StatusLeds<B, R, G>
where
    B: OutputPin,
    R: OutputPin,
    G: OutputPin,
{
    fn show(&mut self, phase: Phase) {
        let (blue, red, green) = Self::pattern(phase);
        drive(&mut self.blue, blue);
        drive(&mut self.red, red);
        drive(&mut self.green, green);
    }
}
