use core::fmt;

/// Possible errors from the SHT1x driver.
///
/// Every variant aborts the transaction that produced it. The driver never
/// retries on its own; run [`Sht1x::reset`](crate::Sht1x::reset) to bring the
/// bus back into a known state before the next measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Sht1xError<E> {
    /// The sensor did not pull DATA low to acknowledge a sent byte.
    NotAcknowledged,
    /// Timed out waiting for the sensor to finish a measurement.
    Timeout,
    /// The received checksum did not match the computed CRC.
    ChecksumMismatch,
    /// Error from the clock or data pin.
    PinError(E),
}

impl<E> From<E> for Sht1xError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Sht1xError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAcknowledged => write!(f, "byte not acknowledged by the sensor"),
            Self::Timeout => write!(f, "timed out waiting for measurement"),
            Self::ChecksumMismatch => write!(f, "checksum does not match"),
            Self::PinError(e) => write!(f, "pin error: {e:?}"),
        }
    }
}
