use core::fmt;

/// Wait phase of the handshake or bit stream that ran out of time.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Sensor never released its ~80 µs acknowledgment low.
    AckHigh,
    /// Sensor never ended its ~80 µs acknowledgment high.
    AckLow,
    /// Sensor never raised the line to start a data bit.
    BitWait,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AckHigh => f.write_str("timed out waiting for 80us HIGH"),
            Stage::AckLow => f.write_str("timed out waiting for 80us LOW"),
            Stage::BitWait => f.write_str("waiting for bit"),
        }
    }
}

/// Possible errors from the DHT11 decoder.
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out in the given wait phase; nothing of the frame is kept.
    Timeout(Stage),
    /// Error from the GPIO data line.
    PinError(E),
}

impl<E> DhtError<E> {
    /// The wait phase that timed out, if this is a timeout.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            DhtError::Timeout(stage) => Some(*stage),
            DhtError::PinError(_) => None,
        }
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::Timeout(stage) => write!(f, "{stage}"),
            DhtError::PinError(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DhtError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DhtError::Timeout(stage) => defmt::write!(f, "Timeout({})", stage),
            DhtError::PinError(e) => defmt::write!(f, "PinError({})", e),
        }
    }
}
