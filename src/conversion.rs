//! Conversion from raw sensor counts to physical units.
//!
//! Coefficients are the datasheet values for 14-bit temperature and 12-bit
//! humidity readings at a 3.3 V supply.

// Temperature
const D1: f64 = -39.66;
const D2: f64 = 0.01;

// Linear humidity
const C1: f64 = -2.0468;
const C2: f64 = 0.0367;
const C3: f64 = -0.000_001_595_5;

// Temperature compensation of humidity
const T1: f64 = 0.01;
const T2: f64 = 0.000_08;

const HUMIDITY_MIN: f64 = 0.1;
const HUMIDITY_MAX: f64 = 100.0;

/// Raw counts of one temperature and one humidity measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawReading {
    /// Temperature count.
    pub temperature: u16,
    /// Relative humidity count.
    pub humidity: u16,
}

impl RawReading {
    /// Converts the counts to physical units.
    pub fn to_reading(&self) -> Reading {
        let temperature = temperature_celsius(self.temperature);
        let humidity = relative_humidity(self.humidity, temperature);
        Reading {
            temperature,
            humidity,
            dewpoint: dewpoint(temperature, humidity),
        }
    }
}

/// Reading returned by the SHT1x sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent, within `0.1..=100.0`.
    pub humidity: f64,
    /// Dewpoint in degrees Celsius.
    pub dewpoint: f64,
}

impl From<RawReading> for Reading {
    fn from(raw: RawReading) -> Self {
        raw.to_reading()
    }
}

/// Temperature in degrees Celsius from a raw temperature count.
pub fn temperature_celsius(raw: u16) -> f64 {
    D1 + D2 * f64::from(raw)
}

/// Temperature compensated relative humidity in percent.
///
/// The result is clamped to `0.1..=100.0`.
pub fn relative_humidity(raw: u16, temperature: f64) -> f64 {
    let raw = f64::from(raw);
    let linear = C1 + C2 * raw + C3 * raw * raw;
    let compensated = (temperature - 25.0) * (T1 + T2 * raw) + linear;
    compensated.clamp(HUMIDITY_MIN, HUMIDITY_MAX)
}

/// Dewpoint in degrees Celsius (Magnus formula).
///
/// `humidity` must be positive; [`relative_humidity`] guarantees that.
pub fn dewpoint(temperature: f64, humidity: f64) -> f64 {
    // Above water / above ice
    let (tn, m) = if temperature >= 0.0 {
        (243.12, 17.62)
    } else {
        (272.62, 22.46)
    };
    let ln_rh = libm::log(humidity / 100.0);
    let x = m * temperature / (tn + temperature);
    tn * (ln_rh + x) / (m - ln_rh - x)
}
