//! Four-coil stepper outputs
//!
//! Each 28BYJ-48 style motor takes four GPIO lines through a ULN2003
//! darlington driver; a coil is energized while its line is high. The bank
//! groups one motor per axis.

use benchprint_core::motion::{Axis, CoilPattern, AXIS_COUNT};
use benchprint_core::traits::CoilBank;
use benchprint_hal::{Level, OutputPin};

/// The four coil lines of one motor, in sequence-table order
pub struct CoilStepper<P> {
    coils: [P; 4],
}

impl<P: OutputPin> CoilStepper<P> {
    /// Take the four coil lines and de-energize them
    pub fn new(coils: [P; 4]) -> Self {
        let mut stepper = Self { coils };
        stepper.release();
        stepper
    }

    /// Drive each line to match `pattern`
    pub fn apply(&mut self, pattern: &CoilPattern) {
        for (pin, &energized) in self.coils.iter_mut().zip(pattern.iter()) {
            pin.set_level(Level::from(energized));
        }
    }

    /// De-energize every coil
    pub fn release(&mut self) {
        self.apply(&[false; 4]);
    }

    /// Current pattern on the lines
    pub fn pattern(&self) -> CoilPattern {
        let mut pattern = [false; 4];
        for (slot, pin) in pattern.iter_mut().zip(self.coils.iter()) {
            *slot = pin.level().is_high();
        }
        pattern
    }
}

/// One [`CoilStepper`] per axis
pub struct PinCoilBank<P> {
    motors: [CoilStepper<P>; AXIS_COUNT],
}

impl<P: OutputPin> PinCoilBank<P> {
    /// Motors in X, Y, Z, E order
    pub fn new(motors: [CoilStepper<P>; AXIS_COUNT]) -> Self {
        Self { motors }
    }

    pub fn motor(&self, axis: Axis) -> &CoilStepper<P> {
        &self.motors[axis.index()]
    }
}

impl<P: OutputPin> CoilBank for PinCoilBank<P> {
    fn set_coils(&mut self, axis: Axis, pattern: &CoilPattern) {
        self.motors[axis.index()].apply(pattern);
    }
}
