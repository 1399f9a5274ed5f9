/// Short delay between clock and data transitions, in microseconds.
pub const CLOCK_DELAY_US: u32 = 2;

/// Settling delay used once by [`Sht1x::initialize`](crate::Sht1x::initialize), in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 20;

/// Interval between two checks of the data-ready signal, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 5;

/// Number of data-ready checks before giving up with a timeout.
///
/// 62 polls of 5 ms bound the wait at roughly 310 ms.
pub const POLL_ATTEMPTS: u16 = 62;

/// Bus timing used by the driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Delay after every clock or data transition, in microseconds.
    pub clock_delay_us: u32,
    /// Settling delay at initialization, in milliseconds.
    pub settle_delay_ms: u32,
    /// Delay between data-ready polls, in milliseconds.
    pub poll_interval_ms: u32,
    /// Maximum number of data-ready polls per measurement.
    pub poll_attempts: u16,
}

impl Config {
    /// Timing matching the sensor datasheet.
    pub const fn new() -> Self {
        Config {
            clock_delay_us: CLOCK_DELAY_US,
            settle_delay_ms: SETTLE_DELAY_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            poll_attempts: POLL_ATTEMPTS,
        }
    }

    /// Returns a copy with a different data-ready bound.
    pub const fn with_poll_attempts(mut self, poll_attempts: u16) -> Self {
        self.poll_attempts = poll_attempts;
        self
    }

    /// Returns a copy with a different inter-transition delay.
    pub const fn with_clock_delay_us(mut self, clock_delay_us: u32) -> Self {
        self.clock_delay_us = clock_delay_us;
        self
    }

    /// Longest time a measurement may take before it times out, in milliseconds.
    pub const fn measurement_timeout_ms(&self) -> u32 {
        self.poll_interval_ms * self.poll_attempts as u32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
