use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::dht11::FrameSource;
use crate::report;
use crate::timing::ITERATION_INTERVAL_MS;

/// Fixed-period loop that reads the sensor and logs every attempt.
pub struct Monitor<SOURCE, SERIAL, DELAY> {
    source: SOURCE,
    serial: SERIAL,
    delay: DELAY,
    iteration: u32,
}

impl<SOURCE, SERIAL, DELAY> Monitor<SOURCE, SERIAL, DELAY>
where
    SOURCE: FrameSource,
    SOURCE::Error: fmt::Display,
    SERIAL: fmt::Write,
    DELAY: DelayNs,
{
    pub fn new(source: SOURCE, serial: SERIAL, delay: DELAY) -> Self {
        Monitor {
            source,
            serial,
            delay,
            iteration: 0,
        }
    }

    /// Continues counting from `iteration` instead of zero.
    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = iteration;
        self
    }

    /// Number the next iteration will be logged with.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Writes the boot banner.
    pub fn start(&mut self) -> fmt::Result {
        report::start(&mut self.serial)
    }

    /// Waits one interval, then makes and logs a single read attempt.
    ///
    /// The counter advances even if writing the log fails. Wraps at `u32::MAX`.
    pub fn run_once(&mut self) -> fmt::Result {
        self.source.idle();
        self.delay.delay_ms(ITERATION_INTERVAL_MS);

        let iteration = self.iteration;
        self.iteration = iteration.wrapping_add(1);

        report::iteration(&mut self.serial, iteration)?;
        match self.source.read_frame() {
            Ok(frame) => report::frame(&mut self.serial, &frame),
            Err(e) => report::error(&mut self.serial, &e),
        }
    }

    /// Runs forever. Neither failed reads nor failed writes stop the loop.
    pub fn run(&mut self) -> ! {
        if self.start().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("monitor: failed to write banner");
        }
        loop {
            if self.run_once().is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("monitor: failed to write iteration {}", self.iteration);
            }
        }
    }

    pub fn release(self) -> (SOURCE, SERIAL, DELAY) {
        (self.source, self.serial, self.delay)
    }
}
