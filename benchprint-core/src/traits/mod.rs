//! Collaborator traits
//!
//! These traits define the interface between the printer logic and the
//! outside world: coil outputs, heater relays, the start/stop button and
//! the status display.

pub mod button;
pub mod coil;
pub mod heater;
pub mod status;

pub use button::Button;
pub use coil::CoilBank;
pub use heater::HeaterOutput;
pub use status::StatusSink;

pub use benchprint_hal::{BlockingDelay, Clock};
