//! Relay heater output
//!
//! Switches a heater element through a relay or SSR on one GPIO line. The
//! line can be active-high or active-low; the logical on/off state is
//! tracked separately from the pin level.

use benchprint_core::traits::HeaterOutput;
use benchprint_hal::{Level, OutputPin};

pub struct RelayHeater<P> {
    pin: P,
    /// If true, heater ON = pin LOW
    active_low: bool,
    /// Current logical state (true = heater on)
    on: bool,
}

impl<P: OutputPin> RelayHeater<P> {
    /// Create a relay heater, switched off
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut heater = Self {
            pin,
            active_low,
            on: false,
        };
        heater.set_on(false);
        heater
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> HeaterOutput for RelayHeater<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_level(Level::from_active(on, self.active_low));
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        level: Level,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                level: Level::Low,
                writes: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_level(&mut self, level: Level) {
            self.level = level;
            self.writes += 1;
        }

        fn level(&self) -> Level {
            self.level
        }
    }

    #[test]
    fn test_active_high_relay() {
        let mut heater = RelayHeater::new_active_high(MockPin::new());

        // Construction drives the line off
        assert!(!heater.is_on());
        assert_eq!(heater.pin().writes, 1);
        assert_eq!(heater.pin().level(), Level::Low);

        heater.set_on(true);
        assert!(heater.is_on());
        assert_eq!(heater.pin().level(), Level::High);

        heater.set_on(false);
        assert!(!heater.is_on());
        assert_eq!(heater.pin().level(), Level::Low);
    }

    #[test]
    fn test_active_low_relay() {
        let mut heater = RelayHeater::new_active_low(MockPin::new());

        // Off means the line idles high
        assert!(!heater.is_on());
        assert_eq!(heater.pin().level(), Level::High);

        heater.set_on(true);
        assert_eq!(heater.pin().level(), Level::Low);

        heater.set_on(false);
        assert_eq!(heater.pin().level(), Level::High);
    }

    #[test]
    fn test_heater_trait() {
        fn check_heater<H: HeaterOutput>(h: &mut H) {
            assert!(!h.is_on());
            h.set_on(true);
            assert!(h.is_on());
        }

        let mut heater = RelayHeater::new_active_high(MockPin::new());
        check_heater(&mut heater);
    }
}
