//! State machine definition
//!
//! Two states and no terminal state: the machine runs for the life of the
//! process.

use super::events::Event;

/// Printer run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrinterState {
    /// Waiting for a press to start the newest job
    #[default]
    Idle,
    /// A job has been run; a long hold stops the printer
    ///
    /// Entered only after the job has finished executing, so stepping is
    /// never in progress while this state is reported.
    Printing,
}

impl PrinterState {
    /// Status line shown on every poll
    pub const fn status_message(self) -> &'static str {
        match self {
            PrinterState::Idle => "Printer is idle",
            PrinterState::Printing => "Printing in progress",
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use PrinterState::*;

        match (self, event) {
            (Idle, JobFinished) => Printing,
            (Printing, StopHeld) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
