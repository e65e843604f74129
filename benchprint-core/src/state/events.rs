//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A job started by a button press has run to completion
    JobFinished,
    /// The button was held for the full stop time
    StopHeld,
}
