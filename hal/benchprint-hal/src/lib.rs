//! benchprint Hardware Abstraction Layer
//!
//! This crate defines the I/O and timing traits the printer core is written
//! against. Chip-specific code (or the host simulator) implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  benchprint-firmware / benchprint-host       │
//! └──────────────────────────────────────────────┘
//!                       │
//!         ┌─────────────┴─────────────┐
//!         ▼                           ▼
//! ┌────────────────┐         ┌────────────────────┐
//! │ benchprint-core│ ◄────── │ benchprint-drivers │
//! └────────────────┘         └────────────────────┘
//!         │                           │
//!         └─────────────┬─────────────┘
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  benchprint-hal (this crate - traits)        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`time::BlockingDelay`] - Busy-wait delays for step pacing
//! - [`time::Clock`] - Monotonic time for hold detection

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
pub use time::{BlockingDelay, Clock};
