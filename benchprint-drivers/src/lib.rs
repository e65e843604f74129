//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in benchprint-core on top of plain digital pins:
//!
//! - Four-coil unipolar stepper outputs
//! - Relay-switched heaters (active-high or active-low)
//! - The start/stop push button
//! - Adapters from `embedded-hal` 1.0 pins and delays to the HAL traits

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod heater;
pub mod input;
pub mod stepper;

pub use gpio::{EhDelay, EhInput, EhOutput};
pub use heater::RelayHeater;
pub use input::PinButton;
pub use stepper::{CoilStepper, PinCoilBank};
