//! Printer state machine and the controller that drives it

pub mod controller;
pub mod events;
pub mod machine;

pub use controller::{JobController, PollOutcome};
pub use events::Event;
pub use machine::PrinterState;
