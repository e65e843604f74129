//! Unipolar stepper outputs

pub mod coil;

pub use coil::{CoilStepper, PinCoilBank};
