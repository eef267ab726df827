//! Compile-time timing configuration.
//!
//! The tick timer is expected to run from a /64 prescaler on a 16 MHz clock,
//! so one tick is 4 µs and an 8-bit counter wraps after 255 ticks (1020 µs).
//! Every timeout budget below must fit under that ceiling.

/// Duration of one timer tick in microseconds.
pub const TICK_US: u16 = 4;

/// Largest tick count the timer can hold before it wraps.
pub const TIMER_MAX_TICKS: u8 = u8::MAX;

/// Time the timer can measure before wrapping, in microseconds.
pub const TIMER_WRAP_US: u16 = TIMER_MAX_TICKS as u16 * TICK_US;

/// How long the data line is held low to request a reading.
pub const START_SIGNAL_MS: u32 = 20;

/// Budget for each half of the sensor acknowledgment (nominally 80 µs).
pub const ACK_TIMEOUT_US: u16 = 88;

/// Budget for the ~50 µs low period that precedes every data bit.
pub const BIT_WAIT_TIMEOUT_US: u16 = 52;

/// High pulses at or under this length are a `0`, longer ones a `1`.
pub const BIT_THRESHOLD_US: u16 = 28;

/// Pause between two read attempts.
pub const ITERATION_INTERVAL_MS: u32 = 3000;

pub const ACK_TIMEOUT_TICKS: u8 = us_to_ticks(ACK_TIMEOUT_US);
pub const BIT_WAIT_TIMEOUT_TICKS: u8 = us_to_ticks(BIT_WAIT_TIMEOUT_US);
pub const BIT_THRESHOLD_TICKS: u8 = us_to_ticks(BIT_THRESHOLD_US);

/// Converts microseconds into whole timer ticks, rounding down.
///
/// Values past the wrap ceiling saturate at [`TIMER_MAX_TICKS`].
pub const fn us_to_ticks(us: u16) -> u8 {
    let ticks = us / TICK_US;
    if ticks > TIMER_MAX_TICKS as u16 {
        TIMER_MAX_TICKS
    } else {
        ticks as u8
    }
}

const _: () = assert!(ACK_TIMEOUT_US < TIMER_WRAP_US);
const _: () = assert!(BIT_WAIT_TIMEOUT_US < TIMER_WRAP_US);
const _: () = assert!(BIT_THRESHOLD_US < BIT_WAIT_TIMEOUT_US);
