use core::fmt;

/// Number of bytes the sensor sends per reading.
pub const FRAME_LEN: usize = 5;

/// 8-bit wraparound sum of the four data bytes.
pub fn checksum(data: &[u8; 4]) -> u8 {
    data.iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
}

/// Outcome of comparing a frame's checksum byte to its data.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Bad,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("ok"),
            Verdict::Bad => f.write_str("bad"),
        }
    }
}

/// A raw five-byte frame: humidity int/frac, temperature int/frac, checksum.
///
/// A frame is returned whenever all 40 bits were received, whether or not the
/// checksum agrees. Use [`SensorFrame::verdict`] to check it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorFrame {
    bytes: [u8; FRAME_LEN],
}

/// An `integer.fraction` pair as sent by the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub integral: u8,
    pub fractional: u8,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integral, self.fractional)
    }
}

impl SensorFrame {
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        SensorFrame { bytes }
    }

    pub const fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Checksum byte as sent by the sensor.
    pub const fn checksum(&self) -> u8 {
        self.bytes[4]
    }

    /// Whether the sensor's checksum matches the data bytes.
    pub fn is_valid(&self) -> bool {
        let [h_int, h_frac, t_int, t_frac, sum] = self.bytes;
        checksum(&[h_int, h_frac, t_int, t_frac]) == sum
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_valid() {
            Verdict::Ok
        } else {
            Verdict::Bad
        }
    }

    pub const fn humidity(&self) -> Measurement {
        Measurement {
            integral: self.bytes[0],
            fractional: self.bytes[1],
        }
    }

    pub const fn temperature(&self) -> Measurement {
        Measurement {
            integral: self.bytes[2],
            fractional: self.bytes[3],
        }
    }
}

impl From<[u8; FRAME_LEN]> for SensorFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        SensorFrame::new(bytes)
    }
}
