//! Host runtime for benchprint
//!
//! Runs the board-agnostic controller on a desktop machine:
//!
//! - TOML configuration with environment override
//! - Job files picked from a directory by modification time
//! - Status messages routed to `tracing`
//! - Simulated coils, relays, button and clock in virtual time

pub mod config;
pub mod error;
pub mod job_dir;
pub mod logging;
pub mod sim;
pub mod status;

pub use config::{HostConfig, SimConfig};
pub use error::HostError;
pub use job_dir::DirectoryJobSource;
pub use status::TracingStatusSink;
