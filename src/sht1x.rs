use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::command::{Command, Measurement};
use crate::config::Config;
use crate::conversion::{RawReading, Reading};
use crate::crc::Crc8;
use crate::error::Sht1xError;
use crate::line::DataLine;
use crate::sequencer::Step::{ClockHigh, ClockLow, DataHigh, DataLow, LongWait, Wait};
use crate::sequencer::{Bus, Step};

#[cfg(feature = "defmt")]
use defmt::{debug, trace, warn};
#[cfg(feature = "log")]
use log::{debug, trace, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// Number of clock pulses with DATA released that resynchronize the bus.
const RESET_CLOCK_PULSES: usize = 9;

const INITIALIZE: [Step; 3] = [LongWait, ClockLow, DataLow];

const CLOCK_PULSE: [Step; 4] = [ClockHigh, Wait, ClockLow, Wait];

/// DATA falls while SCK is high, SCK pulses low, DATA rises while SCK is high.
const TRANSMISSION_START: [Step; 12] = [
    ClockHigh, Wait, DataLow, Wait, ClockLow, Wait, ClockHigh, Wait, DataHigh, Wait, ClockLow,
    Wait,
];

/// Driver for the SHT1x temperature and humidity sensor.
pub struct Sht1x<SCK, DATA, D> {
    bus: Bus<SCK, DATA, D>,
    crc: Crc8,
}

impl<SCK, DATA, D, E> Sht1x<SCK, DATA, D>
where
    SCK: OutputPin<Error = E>,
    DATA: DataLine<Error = E>,
    D: DelayNs,
{
    /// Creates a new instance of the SHT1x driver with the default timing.
    ///
    /// The clock pin and the data line must report the same error type `E`,
    /// which is what [`Sht1xError::PinError`] carries. Pins from one HAL
    /// normally share it; otherwise wrap one of them to map its error.
    ///
    /// # Arguments
    ///
    /// * `sck` - The GPIO pin connected to the sensor clock line.
    /// * `data` - The sensor data line, see [`DataLine`] and [`OpenDrain`](crate::OpenDrain).
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(sck: SCK, data: DATA, delay: D) -> Self {
        Self::with_config(sck, data, delay, Config::default())
    }

    /// Creates a new instance of the SHT1x driver with explicit timing.
    pub fn with_config(sck: SCK, data: DATA, delay: D, config: Config) -> Self {
        Sht1x {
            bus: Bus::new(sck, data, delay, config),
            crc: Crc8::new(),
        }
    }

    /// The timing in use.
    pub fn config(&self) -> &Config {
        &self.bus.config
    }

    /// Lets the sensor settle and puts both lines in their idle state.
    ///
    /// Call once after power-up, before any other operation.
    pub fn initialize(&mut self) -> Result<(), Sht1xError<E>> {
        debug!("sht1x: initialize");
        self.bus.run(&INITIALIZE)?;
        Ok(())
    }

    /// Resynchronizes the bus and soft-resets the sensor.
    ///
    /// Use this to recover after any error.
    pub fn reset(&mut self) -> Result<(), Sht1xError<E>> {
        debug!("sht1x: reset");
        self.bus.run(&[DataHigh, Wait])?;
        for _ in 0..RESET_CLOCK_PULSES {
            self.bus.run(&CLOCK_PULSE)?;
        }
        self.transmission_start()?;
        self.send_byte(Command::SoftReset.as_u8())
    }

    /// Measures a single quantity and returns its raw count.
    ///
    /// # Returns
    ///
    /// * `Ok(u16)` if the measurement completed and its checksum is valid.
    /// * `Err(Sht1xError)` on the first communication, timeout or checksum error.
    pub fn read(&mut self, measurement: Measurement) -> Result<u16, Sht1xError<E>> {
        self.start_measurement(measurement)?;
        self.read_value()
    }

    /// Measures temperature, then humidity.
    ///
    /// Humidity is not attempted if the temperature measurement fails.
    pub fn read_all(&mut self) -> Result<RawReading, Sht1xError<E>> {
        let temperature = self.read(Measurement::Temperature)?;
        let humidity = self.read(Measurement::Humidity)?;
        Ok(RawReading {
            temperature,
            humidity,
        })
    }

    /// Measures temperature and humidity and converts them, including the dewpoint.
    pub fn sensor_values(&mut self) -> Result<Reading, Sht1xError<E>> {
        Ok(self.read_all()?.to_reading())
    }

    /// Gives back the clock pin, the data line and the delay provider.
    ///
    /// The lines are left as they are; this cannot fail.
    pub fn shutdown(self) -> (SCK, DATA, D) {
        let Bus {
            sck, data, delay, ..
        } = self.bus;
        (sck, data, delay)
    }

    /// Marks the start of a command and clears the checksum.
    fn transmission_start(&mut self) -> Result<(), Sht1xError<E>> {
        self.bus.run(&TRANSMISSION_START)?;
        self.crc.reset();
        Ok(())
    }

    /// Clocks out one byte, MSB first, and checks the sensor's acknowledgment.
    fn send_byte(&mut self, value: u8) -> Result<(), Sht1xError<E>> {
        trace!("sht1x: send {:#x}", value);
        for bit in (0..8).rev() {
            let level = if value & (1 << bit) != 0 {
                DataHigh
            } else {
                DataLow
            };
            self.bus.run(&[ClockLow, Wait, level, Wait, ClockHigh, Wait])?;
        }

        // Release DATA and clock in the acknowledgment
        self.bus.run(&[ClockLow, Wait, DataHigh, Wait, ClockHigh, Wait])?;
        if self.bus.sample()? {
            warn!("sht1x: byte {:#x} not acknowledged", value);
            return Err(Sht1xError::NotAcknowledged);
        }
        self.crc.update(value);

        self.bus.run(&[ClockLow, Wait])?;
        Ok(())
    }

    /// Clocks in one byte, MSB first.
    ///
    /// With `ack` set DATA is pulled low after the eighth bit to ask for
    /// another byte; otherwise it stays released and the transfer ends.
    fn receive_byte(&mut self, ack: bool) -> Result<u8, Sht1xError<E>> {
        let mut byte: u8 = 0;

        for bit in (0..8).rev() {
            self.bus.run(&[ClockHigh, Wait])?;
            if self.bus.sample()? {
                byte |= 1 << bit;
            }
            // Falling edge tells the sensor to shift out the next bit
            self.bus.run(&[ClockLow, Wait])?;
        }

        if ack {
            self.bus.run(&[DataLow, Wait])?;
        }
        self.bus.run(&[ClockHigh, Wait, ClockLow, Wait])?;
        if ack {
            self.bus.run(&[DataHigh, Wait])?;
        }

        Ok(byte)
    }

    fn start_measurement(&mut self, measurement: Measurement) -> Result<(), Sht1xError<E>> {
        self.transmission_start()?;
        self.send_byte(measurement.command().as_u8())
    }

    /// Waits until the sensor pulls DATA low to signal a finished measurement.
    ///
    /// # Errors
    ///
    /// Returns `Sht1xError::Timeout` after `poll_attempts` checks without data.
    fn wait_for_data(&mut self) -> Result<(), Sht1xError<E>> {
        for _ in 0..self.bus.config.poll_attempts {
            if !self.bus.sample()? {
                return Ok(());
            }
            self.bus.step(Step::PollWait)?;
        }
        warn!(
            "sht1x: no data after {} polls",
            self.bus.config.poll_attempts
        );
        Err(Sht1xError::Timeout)
    }

    /// Reads a 16-bit measurement and its checksum.
    fn read_value(&mut self) -> Result<u16, Sht1xError<E>> {
        self.wait_for_data()?;

        let high = self.receive_byte(true)?;
        self.crc.update(high);
        let low = self.receive_byte(true)?;
        self.crc.update(low);
        let checksum = self.receive_byte(false)?;

        if !self.crc.verify(checksum) {
            warn!(
                "sht1x: checksum {:#x} does not match {:#x}",
                checksum,
                self.crc.value()
            );
            return Err(Sht1xError::ChecksumMismatch);
        }

        let value = u16::from_be_bytes([high, low]);
        trace!("sht1x: read {}", value);
        Ok(value)
    }
}
