//! Simulated hardware
//!
//! Everything runs in virtual time held by a shared [`SimTime`]. Step delays
//! advance it by their full length, and every clock read advances it by a
//! small tick so a busy-wait on the button always makes progress.

pub mod hardware;
pub mod scenario;

use std::{cell::Cell, rc::Rc};

pub use hardware::{MoveRecord, SimButton, SimClock, SimCoilBank, SimDelay, SimHeater};
pub use scenario::{build_controller, run_scenario, SimController, SimReport};

/// Shared virtual time base, in microseconds
#[derive(Debug, Clone, Default)]
pub struct SimTime {
    now_us: Rc<Cell<u64>>,
}

impl SimTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_us(&self) -> u64 {
        self.now_us.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_us.get() / 1000
    }

    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(us));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms.saturating_mul(1000));
    }
}
