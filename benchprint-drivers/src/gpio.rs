//! `embedded-hal` adapters
//!
//! Chip HALs expose `embedded_hal::digital` pins and `DelayNs` delays. The
//! wrappers here turn them into the infallible benchprint HAL traits. Only
//! pins whose error type is [`Infallible`] are accepted, which covers the
//! RP2040 on-chip GPIO.

use core::convert::Infallible;

use benchprint_hal::{BlockingDelay, InputPin, Level, OutputPin};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital;

/// Push-pull output with its last driven level
pub struct EhOutput<P> {
    pin: P,
    level: Level,
}

impl<P: digital::OutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap `pin` and drive it to `initial`
    pub fn new(pin: P, initial: Level) -> Self {
        let mut out = Self {
            pin,
            level: initial,
        };
        out.set_level(initial);
        out
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn set_level(&mut self, level: Level) {
        let result = match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        };
        result.unwrap_or_else(|never| match never {});
        self.level = level;
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Digital input
pub struct EhInput<P> {
    pin: P,
}

impl<P: digital::InputPin<Error = Infallible>> EhInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: digital::InputPin<Error = Infallible>> InputPin for EhInput<P> {
    fn read(&mut self) -> Level {
        let high = self.pin.is_high().unwrap_or_else(|never| match never {});
        Level::from(high)
    }
}

/// Busy-wait delay
pub struct EhDelay<D> {
    delay: D,
}

impl<D: DelayNs> EhDelay<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> BlockingDelay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
