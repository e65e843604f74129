//! Configuration types
//!
//! Board-agnostic configuration structures. Hosts load them from TOML via
//! the `serde` feature; firmware uses the compiled-in defaults.

pub mod types;

pub use types::*;
