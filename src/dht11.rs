use embedded_hal::delay::DelayNs;

use crate::error::{DhtError, Stage};
use crate::frame::{FRAME_LEN, SensorFrame};
use crate::hal::{DataLine, Direction, TickTimer};
use crate::status::{Phase, StatusIndicator};
use crate::timing::{
    ACK_TIMEOUT_TICKS, BIT_THRESHOLD_TICKS, BIT_WAIT_TIMEOUT_TICKS, START_SIGNAL_MS,
};

/// Anything that yields one sensor frame per call.
pub trait FrameSource {
    type Error;

    /// Performs one complete read attempt.
    fn read_frame(&mut self) -> Result<SensorFrame, Self::Error>;

    /// Called once at the top of every iteration, before pacing.
    fn idle(&mut self) {}
}

/// Classifies a high pulse measured in timer ticks.
///
/// Pulses up to and including [`BIT_THRESHOLD_TICKS`] are a `0`.
pub fn decode_bit(ticks: u8) -> bool {
    ticks > BIT_THRESHOLD_TICKS
}

/// Packs eight bits into a byte, the first bit landing in the MSB.
pub fn pack_bits(bits: [bool; 8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |byte, (i, bit)| if *bit { byte | 1 << (7 - i) } else { byte })
}

/// Driver for the DHT11 temperature and humidity sensor.
///
/// Pulse widths are measured by polling the data line against a free-running
/// [`TickTimer`]; the delay provider is only used for the start signal.
pub struct Dht11<PIN, TIMER, DELAY, STATUS = ()> {
    pin: PIN,
    timer: TIMER,
    delay: DELAY,
    status: STATUS,
}

impl<PIN, TIMER, DELAY> Dht11<PIN, TIMER, DELAY, ()> {
    /// Creates a new instance of the DHT11 driver without status indicators.
    ///
    /// # Arguments
    ///
    /// * `pin` - The bidirectional GPIO line connected to the DHT11 data pin.
    /// * `timer` - A tick counter, see [`crate::timing`] for the expected rate.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(pin: PIN, timer: TIMER, delay: DELAY) -> Self {
        Dht11::with_status(pin, timer, delay, ())
    }
}

impl<PIN, TIMER, DELAY, STATUS> Dht11<PIN, TIMER, DELAY, STATUS> {
    /// Like [`Dht11::new`], also reporting each phase to `status`.
    pub fn with_status(pin: PIN, timer: TIMER, delay: DELAY, status: STATUS) -> Self {
        Dht11 {
            pin,
            timer,
            delay,
            status,
        }
    }

    /// Gives back the peripherals.
    pub fn release(self) -> (PIN, TIMER, DELAY, STATUS) {
        (self.pin, self.timer, self.delay, self.status)
    }
}

impl<PIN, TIMER, DELAY, STATUS, E> Dht11<PIN, TIMER, DELAY, STATUS>
where
    PIN: DataLine<Error = E>,
    TIMER: TickTimer,
    DELAY: DelayNs,
    STATUS: StatusIndicator,
{
    /// Reads one frame from the DHT11 sensor.
    ///
    /// Sends the start signal, waits for the acknowledgment and decodes 40
    /// bits. The checksum is not enforced here: a frame with a bad checksum
    /// is still returned, see [`SensorFrame::verdict`].
    ///
    /// # Errors
    ///
    /// * `DhtError::Timeout(stage)` if a timed wait ran out; no partial data is kept.
    /// * `DhtError::PinError(e)` if the data line failed.
    ///
    /// The initial pull-down and each pulse measurement have no timeout and
    /// block until the sensor drives the line.
    pub fn read(&mut self) -> Result<SensorFrame, DhtError<E>> {
        self.start()?;

        let mut data = [0; FRAME_LEN];
        for b in data.iter_mut() {
            *b = self.read_byte()?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("dht11: frame {}", data);

        Ok(SensorFrame::new(data))
    }

    /// Sends the start request and waits through the sensor's acknowledgment.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        // MCU holds the line low to request a reading
        self.enter(Phase::Start);
        self.pin.set_direction(Direction::Output)?;
        self.pin.set_low()?;
        self.delay.delay_ms(START_SIGNAL_MS);

        // Release the line and let the sensor pull it down
        self.enter(Phase::Release);
        self.pin.set_high()?;
        self.pin.set_direction(Direction::Input)?;
        Self::wait_until(|| self.pin.is_low())?;

        self.enter(Phase::AwaitAckHigh);
        self.wait_for_high(ACK_TIMEOUT_TICKS, Stage::AckHigh)?; // 80us low

        self.enter(Phase::AwaitAckLow);
        self.wait_for_low(ACK_TIMEOUT_TICKS, Stage::AckLow)?; // 80us high

        self.enter(Phase::Idle);
        Ok(())
    }

    /// Moves the status indicators to `phase`.
    fn enter(&mut self, phase: Phase) {
        #[cfg(feature = "defmt")]
        defmt::trace!("dht11: {}", phase);
        self.status.show(phase);
    }

    /// Reads one byte (8 bits), most significant bit first.
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut bits = [false; 8];
        for bit in bits.iter_mut() {
            *bit = self.read_bit()?;
        }
        Ok(pack_bits(bits))
    }

    /// Reads a single bit from the sensor.
    ///
    /// Every bit starts with a ~50us low; its value is the length of the
    /// high pulse that follows.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        self.wait_for_high(BIT_WAIT_TIMEOUT_TICKS, Stage::BitWait)?;

        self.timer.reset();
        Self::wait_until(|| self.pin.is_low())?;

        Ok(decode_bit(self.timer.ticks()))
    }

    /// Waits until the data line goes high or `timeout` ticks pass.
    fn wait_for_high(&mut self, timeout: u8, stage: Stage) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.timer, timeout, stage, || self.pin.is_high())
    }

    /// Waits until the data line goes low or `timeout` ticks pass.
    fn wait_for_low(&mut self, timeout: u8, stage: Stage) -> Result<(), DhtError<E>> {
        Self::wait_for_state(&mut self.timer, timeout, stage, || self.pin.is_low())
    }

    /// Restarts the timer and polls `condition` until it holds.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout(stage)` once the timer reads more than `timeout`.
    fn wait_for_state<F>(
        timer: &mut TIMER,
        timeout: u8,
        stage: Stage,
        mut condition: F,
    ) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        timer.reset();
        loop {
            if condition()? {
                return Ok(());
            }
            if timer.ticks() > timeout {
                #[cfg(feature = "defmt")]
                defmt::warn!("dht11: timeout in {}", stage);
                return Err(DhtError::Timeout(stage));
            }
        }
    }

    /// Polls `condition` with no time limit.
    fn wait_until<F>(mut condition: F) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        while !condition()? {}
        Ok(())
    }
}

impl<PIN, TIMER, DELAY, STATUS, E> FrameSource for Dht11<PIN, TIMER, DELAY, STATUS>
where
    PIN: DataLine<Error = E>,
    TIMER: TickTimer,
    DELAY: DelayNs,
    STATUS: StatusIndicator,
{
    type Error = DhtError<E>;

    fn read_frame(&mut self) -> Result<SensorFrame, Self::Error> {
        self.read()
    }

    fn idle(&mut self) {
        self.enter(Phase::Idle);
    }
}
