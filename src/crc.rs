/// Generator polynomial x^8 + x^5 + x^4 + 1.
const POLYNOMIAL: u8 = 0x31;

/// Running CRC-8 over the bytes of one transmission.
///
/// The sensor transmits its checksum with the bit order reversed, so
/// [`Crc8::value`] returns the mirrored accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc8 {
    crc: u8,
}

impl Crc8 {
    /// Creates an accumulator starting at zero.
    pub const fn new() -> Self {
        Crc8 { crc: 0 }
    }

    /// Clears the accumulator for a new transmission.
    pub fn reset(&mut self) {
        self.crc = 0;
    }

    /// Feeds one byte, most significant bit first.
    pub fn update(&mut self, byte: u8) {
        let mut byte = byte;
        for _ in 0..8 {
            if (self.crc ^ byte) & 0x80 != 0 {
                self.crc = (self.crc << 1) ^ POLYNOMIAL;
            } else {
                self.crc <<= 1;
            }
            byte <<= 1;
        }
    }

    /// Checksum in the order the sensor sends it.
    pub fn value(&self) -> u8 {
        self.crc.reverse_bits()
    }

    /// Checks a checksum byte received from the sensor.
    pub fn verify(&self, checksum: u8) -> bool {
        self.value() == checksum
    }
}
