//! Heater outputs

pub mod relay;

pub use relay::RelayHeater;
