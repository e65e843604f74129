//! GPIO pin abstractions
//!
//! The core only ever needs "drive this line" and "sample that line".
//! Pins are infallible at this layer: a stuck output or bus fault is a
//! platform concern and never reaches application code.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level that represents `active` on a line with the given polarity
    ///
    /// Active-low lines map `true` to [`Level::Low`].
    pub const fn from_active(active: bool, active_low: bool) -> Self {
        if active != active_low {
            Level::High
        } else {
            Level::Low
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin to `level`
    fn set_level(&mut self, level: Level);

    /// Level the pin was last driven to
    fn level(&self) -> Level;

    fn set_high(&mut self) {
        self.set_level(Level::High);
    }

    fn set_low(&mut self) {
        self.set_level(Level::Low);
    }
}

/// Digital input pin
///
/// Sampling takes `&mut self` because some platforms latch the read.
pub trait InputPin {
    /// Sample the current level of the pin
    fn read(&mut self) -> Level;

    fn is_low(&mut self) -> bool {
        self.read() == Level::Low
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_level(&mut self, level: Level) {
        (**self).set_level(level)
    }

    fn level(&self) -> Level {
        (**self).level()
    }
}
