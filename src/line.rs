use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// The bidirectional DATA line of the SHT1x bus.
///
/// The line is pseudo open-drain: the driver never actively drives it high.
/// A logic low is produced by switching the line to an output driven low, a
/// logic high by releasing it and letting the pull-up (or the sensor) set the
/// level.
///
/// Platforms that have to switch the pin direction by hand implement this
/// trait directly. A pin already configured as open-drain can be wrapped in
/// [`OpenDrain`].
pub trait DataLine: ErrorType {
    /// Switch the line to output and drive it low.
    fn assert_low(&mut self) -> Result<(), Self::Error>;

    /// Stop driving the line so it floats high.
    fn release(&mut self) -> Result<(), Self::Error>;

    /// Sample the current level of the line.
    fn is_high(&mut self) -> Result<bool, Self::Error>;
}

/// Adapts an open-drain GPIO (one that implements both [`InputPin`] and
/// [`OutputPin`]) to a [`DataLine`].
///
/// Setting such a pin high leaves it floating, which is exactly a release.
#[derive(Debug)]
pub struct OpenDrain<P> {
    pin: P,
}

impl<P> OpenDrain<P> {
    /// Wraps an open-drain pin.
    pub fn new(pin: P) -> Self {
        OpenDrain { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P> DataLine for OpenDrain<P>
where
    P: InputPin + OutputPin,
{
    fn assert_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }
}
