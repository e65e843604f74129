//! Start/stop push button on a GPIO line
//!
//! The stock wiring pulls the line up and the switch shorts it to ground,
//! so the button is active-low. No debouncing: a bounce on release reads as
//! a release, which only ends a hold early.

use benchprint_core::traits::Button;
use benchprint_hal::{InputPin, Level};

pub struct PinButton<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> PinButton<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button that shorts a pulled-up line to ground
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> Button for PinButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.read() == Level::from_active(true, self.active_low)
    }
}
