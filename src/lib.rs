//! SHT1x Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the SHT10, SHT11 and SHT15
//! temperature and humidity sensors, built on top of the [`embedded-hal`] traits.
//!
//! The sensor speaks a two-wire protocol that resembles, but is not, I²C. The
//! driver bit-bangs it on two GPIO lines: a clock output and a pseudo
//! open-drain data line.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - CRC-8 verification of every measurement
//! - Temperature, temperature compensated relative humidity and dewpoint
//! - Optional logging support via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`OutputPin`] for the clock line
//! - [`InputPin`] and [`OutputPin`] (through [`OpenDrain`]) or a custom [`DataLine`] for the data line
//! - [`DelayNs`] for accurate timing
//!
//! # Usage
//!
//! ```ignore
//! use sht1x_sensor::{OpenDrain, Sht1x};
//!
//! let mut sht = Sht1x::new(sck_pin, OpenDrain::new(data_pin), delay);
//! sht.initialize()?;
//! sht.reset()?;
//!
//! let reading = sht.sensor_values()?;
//! defmt::info!("{} C, {} %RH, dewpoint {} C", reading.temperature, reading.humidity, reading.dewpoint);
//! ```
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` crate
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod sequencer;

pub mod command;
pub mod config;
pub mod conversion;
pub mod crc;
pub mod error;
pub mod line;
pub mod sht1x;

pub use command::{Command, Measurement};
pub use config::Config;
pub use conversion::{RawReading, Reading};
pub use error::Sht1xError;
pub use line::{DataLine, OpenDrain};
pub use sht1x::Sht1x;
