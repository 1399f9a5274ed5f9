/// Command bytes understood by the sensor.
///
/// The upper three bits are the (always zero) address, the lower five the command.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Start a temperature measurement.
    MeasureTemperature = 0b0000_0011, // 0x03
    /// Start a relative humidity measurement.
    MeasureHumidity = 0b0000_0101, // 0x05
    /// Soft reset. Clears the status register to its default.
    SoftReset = 0b0001_1110, // 0x1E
}

impl Command {
    /// The byte sent on the wire.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Physical quantity a measurement command requests.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    /// Temperature (14-bit count).
    Temperature,
    /// Relative humidity (12-bit count).
    Humidity,
}

impl Measurement {
    /// The command that starts this measurement.
    pub const fn command(self) -> Command {
        match self {
            Measurement::Temperature => Command::MeasureTemperature,
            Measurement::Humidity => Command::MeasureHumidity,
        }
    }
}
