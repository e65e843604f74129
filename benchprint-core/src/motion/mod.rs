//! Stepper motion
//!
//! Axis identifiers, the coil sequence table and the blocking axis driver.

pub mod axis;
pub mod coil;
pub mod driver;

pub use axis::{Axis, AXIS_COUNT};
pub use coil::{CoilPattern, PHASES_PER_STEP, RESTING_PATTERN, STEP_SEQUENCE};
pub use driver::{step_count, AxisDriver};
