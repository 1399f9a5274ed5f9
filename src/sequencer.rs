use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{config::Config, line::DataLine};

/// One atomic bus operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    ClockHigh,
    ClockLow,
    /// Drive DATA low.
    DataLow,
    /// Release DATA so it floats high.
    DataHigh,
    /// Short inter-transition delay.
    Wait,
    /// Settling delay at initialization.
    LongWait,
    /// Delay between data-ready polls.
    PollWait,
}

/// Owns the two bus lines and the delay provider and executes [`Step`]s on them.
pub(crate) struct Bus<SCK, DATA, D> {
    pub(crate) sck: SCK,
    pub(crate) data: DATA,
    pub(crate) delay: D,
    pub(crate) config: Config,
}

impl<SCK, DATA, D, E> Bus<SCK, DATA, D>
where
    SCK: OutputPin<Error = E>,
    DATA: DataLine<Error = E>,
    D: DelayNs,
{
    pub(crate) fn new(sck: SCK, data: DATA, delay: D, config: Config) -> Self {
        Bus {
            sck,
            data,
            delay,
            config,
        }
    }

    pub(crate) fn step(&mut self, step: Step) -> Result<(), E> {
        match step {
            Step::ClockHigh => self.sck.set_high(),
            Step::ClockLow => self.sck.set_low(),
            Step::DataLow => self.data.assert_low(),
            Step::DataHigh => self.data.release(),
            Step::Wait => {
                self.delay.delay_us(self.config.clock_delay_us);
                Ok(())
            }
            Step::LongWait => {
                self.delay.delay_ms(self.config.settle_delay_ms);
                Ok(())
            }
            Step::PollWait => {
                self.delay.delay_ms(self.config.poll_interval_ms);
                Ok(())
            }
        }
    }

    /// Executes `steps` in order, stopping at the first failing one.
    pub(crate) fn run(&mut self, steps: &[Step]) -> Result<(), E> {
        for step in steps {
            self.step(*step)?;
        }
        Ok(())
    }

    /// Reads the level on DATA.
    pub(crate) fn sample(&mut self) -> Result<bool, E> {
        self.data.is_high()
    }
}
