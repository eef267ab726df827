//! Scripted stand-ins for the data line and tick timer.
//!
//! Both halves share one script of `(level, ticks)` samples. Every read of the
//! line consumes the next sample and latches its tick count, which is what the
//! timer reports until the next read.

use std::{cell::RefCell, collections::VecDeque, rc::Rc, vec::Vec};

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::hal::{DataLine, Direction, TickTimer};
use crate::status::{Phase, StatusIndicator};
use crate::timing::{ACK_TIMEOUT_TICKS, BIT_THRESHOLD_TICKS, BIT_WAIT_TIMEOUT_TICKS};

const HIGH: bool = true;
const LOW: bool = false;

/// Everything the decoder did to the bus, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Direction(Direction),
    Level(bool),
    TimerReset,
}

#[derive(Debug, Default)]
struct Bus {
    samples: VecDeque<(bool, u8)>,
    ticks: u8,
    events: Vec<Event>,
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedLine(Rc<RefCell<Bus>>);

#[derive(Clone, Debug)]
pub struct ScriptedTimer(Rc<RefCell<Bus>>);

impl ScriptedLine {
    pub fn new(script: Script) -> (Self, ScriptedTimer) {
        let bus = Rc::new(RefCell::new(Bus {
            samples: script.samples.into(),
            ..Default::default()
        }));
        (ScriptedLine(bus.clone()), ScriptedTimer(bus))
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    /// Samples the decoder has not consumed.
    pub fn remaining(&self) -> usize {
        self.0.borrow().samples.len()
    }

    fn sample(&mut self) -> bool {
        let mut bus = self.0.borrow_mut();
        let (level, ticks) = bus.samples.pop_front().expect("line script exhausted");
        bus.ticks = ticks;
        level
    }
}

impl ErrorType for ScriptedLine {
    type Error = Infallible;
}

impl InputPin for ScriptedLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.sample())
    }
}

impl OutputPin for ScriptedLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Level(LOW));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Level(HIGH));
        Ok(())
    }
}

impl DataLine for ScriptedLine {
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Direction(direction));
        Ok(())
    }
}

impl TickTimer for ScriptedTimer {
    fn reset(&mut self) {
        let mut bus = self.0.borrow_mut();
        bus.ticks = 0;
        bus.events.push(Event::TimerReset);
    }

    fn ticks(&mut self) -> u8 {
        self.0.borrow().ticks
    }
}

/// Builder for what the sensor puts on the line.
#[derive(Clone, Debug, Default)]
pub struct Script {
    samples: Vec<(bool, u8)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(mut self, level: bool, ticks: u8) -> Self {
        self.samples.push((level, ticks));
        self
    }

    /// Line stays at `level` for ticks `0..=last`, one sample per tick.
    pub fn hold(mut self, level: bool, last: u8) -> Self {
        self.samples.extend((0..=last).map(|t| (level, t)));
        self
    }

    /// Sensor answers the start request: pull-down, 80 µs low, 80 µs high.
    pub fn ack(self) -> Self {
        self.sample(HIGH, 0)
            .sample(LOW, 0) // release poll sees the pull-down
            .hold(LOW, 19)
            .sample(HIGH, 20) // ack high
            .hold(HIGH, 19)
            .sample(LOW, 20) // ack low, data starts
    }

    /// One data bit with a high pulse of `pulse` ticks.
    pub fn pulse(self, pulse: u8) -> Self {
        self.sample(LOW, 5)
            .sample(HIGH, 12)
            .sample(HIGH, pulse / 2)
            .sample(LOW, pulse)
    }

    pub fn bit(self, one: bool) -> Self {
        self.pulse(if one {
            BIT_THRESHOLD_TICKS * 2 + 3
        } else {
            BIT_THRESHOLD_TICKS - 1
        })
    }

    /// One byte, most significant bit first.
    pub fn byte(self, byte: u8) -> Self {
        (0..8).fold(self, |s, i| s.bit((byte >> (7 - i)) & 1 == 1))
    }

    pub fn frame(self, bytes: [u8; 5]) -> Self {
        bytes.iter().fold(self, |s, b| s.byte(*b))
    }

    /// Sensor pulls down but never releases the acknowledgment low.
    pub fn stuck_ack_low(self) -> Self {
        self.sample(LOW, 0).hold(LOW, ACK_TIMEOUT_TICKS + 1)
    }

    /// Sensor releases the acknowledgment low but never starts data.
    pub fn stuck_ack_high(self) -> Self {
        self.sample(LOW, 0)
            .sample(HIGH, 20)
            .hold(HIGH, ACK_TIMEOUT_TICKS + 1)
    }

    /// Line never rises for the next bit.
    pub fn stuck_bit_low(self) -> Self {
        self.hold(LOW, BIT_WAIT_TIMEOUT_TICKS + 1)
    }
}

/// Records every phase shown.
#[derive(Debug, Default)]
pub struct PhaseLog(pub Vec<Phase>);

impl StatusIndicator for PhaseLog {
    fn show(&mut self, phase: Phase) {
        self.0.push(phase);
    }
}
