//! Heater relay trait

/// Trait for heater output control
///
/// Implementations switch the heater element via a relay, SSR or MOSFET.
/// There is no temperature feedback: the output is purely on/off.
pub trait HeaterOutput {
    /// Turn the heater on or off
    fn set_on(&mut self, on: bool);

    /// Check if the heater is currently on
    fn is_on(&self) -> bool;
}
