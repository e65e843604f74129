//! Board-agnostic core logic for the printer controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (coil bank, heater relay, button, status, jobs)
//! - G-code lexer and command parser
//! - Coil sequence table and blocking axis driver
//! - Binary heater control
//! - Command interpreter
//! - Job state machine driven by the start/stop button
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod gcode;
pub mod interpreter;
pub mod job;
pub mod motion;
pub mod state;
pub mod status;
pub mod thermal;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::{AxisConfig, ConfigError, MachineConfig};
pub use gcode::{parse_line, Command};
pub use interpreter::{Interpreter, RunSummary};
pub use job::{Job, JobSource, NoJobs, StaticJobSource};
pub use motion::{Axis, AxisDriver};
pub use state::{JobController, PollOutcome, PrinterState};
pub use thermal::{HeaterKind, ThermalControl};
