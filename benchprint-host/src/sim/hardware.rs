//! Simulated collaborators

use std::{cell::RefCell, rc::Rc};

use benchprint_core::motion::{Axis, CoilPattern, AXIS_COUNT, PHASES_PER_STEP};
use benchprint_core::traits::{BlockingDelay, Button, Clock, CoilBank, HeaterOutput};
use benchprint_core::HeaterKind;
use tracing::{debug, trace};

use super::SimTime;

/// A run of consecutive coil writes to one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub axis: Axis,
    pub phases: u64,
}

impl MoveRecord {
    /// Whole steps in the run
    pub fn steps(&self) -> u64 {
        self.phases / PHASES_PER_STEP as u64
    }
}

/// Coil bank that records what it was asked to energize
#[derive(Debug, Default)]
pub struct SimCoilBank {
    writes: [u64; AXIS_COUNT],
    patterns: [CoilPattern; AXIS_COUNT],
    moves: Vec<MoveRecord>,
}

impl SimCoilBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern writes to `axis` so far
    pub fn writes(&self, axis: Axis) -> u64 {
        self.writes[axis.index()]
    }

    /// Pattern currently on the coils of `axis`
    pub fn pattern(&self, axis: Axis) -> CoilPattern {
        self.patterns[axis.index()]
    }

    /// Writes grouped into per-axis runs, in order
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }
}

impl CoilBank for SimCoilBank {
    fn set_coils(&mut self, axis: Axis, pattern: &CoilPattern) {
        self.writes[axis.index()] += 1;
        self.patterns[axis.index()] = *pattern;

        match self.moves.last_mut() {
            Some(run) if run.axis == axis => run.phases += 1,
            _ => self.moves.push(MoveRecord { axis, phases: 1 }),
        }
    }
}

/// Relay that logs every switch
#[derive(Debug)]
pub struct SimHeater {
    kind: HeaterKind,
    on: bool,
    switches: u32,
}

impl SimHeater {
    pub fn new(kind: HeaterKind) -> Self {
        Self {
            kind,
            on: false,
            switches: 0,
        }
    }

    /// Relay writes so far
    pub fn switches(&self) -> u32 {
        self.switches
    }
}

impl HeaterOutput for SimHeater {
    fn set_on(&mut self, on: bool) {
        debug!(heater = self.kind.label(), on, "Relay switched");
        self.on = on;
        self.switches += 1;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Delay that advances virtual time instead of spinning
#[derive(Debug)]
pub struct SimDelay {
    time: SimTime,
    total_us: u64,
}

impl SimDelay {
    pub fn new(time: SimTime) -> Self {
        Self { time, total_us: 0 }
    }

    /// Time spent waiting so far
    pub fn total_us(&self) -> u64 {
        self.total_us
    }
}

impl BlockingDelay for SimDelay {
    fn delay_us(&mut self, us: u32) {
        self.time.advance_us(us as u64);
        self.total_us += us as u64;
    }
}

/// Clock over virtual time
///
/// Each read moves time forward by `tick_us`, standing in for the cost of
/// the loop around it.
#[derive(Debug)]
pub struct SimClock {
    time: SimTime,
    tick_us: u64,
}

impl SimClock {
    pub fn new(time: SimTime, tick_us: u64) -> Self {
        Self { time, tick_us }
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        let now = self.time.now_ms();
        self.time.advance_us(self.tick_us);
        now
    }
}

/// Button pressed during scripted windows of virtual time
///
/// Clones share the script, so a caller can keep a handle and add presses
/// after the button has been handed to the controller.
#[derive(Debug, Clone)]
pub struct SimButton {
    time: SimTime,
    /// `[start_ms, end_ms)` press windows
    presses: Rc<RefCell<Vec<(u64, u64)>>>,
}

impl SimButton {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            presses: Rc::default(),
        }
    }

    /// Hold the button from `start_ms` for `duration_ms`
    pub fn press(&self, start_ms: u64, duration_ms: u64) {
        trace!(start_ms, duration_ms, "Press scripted");
        self.presses
            .borrow_mut()
            .push((start_ms, start_ms.saturating_add(duration_ms)));
    }

    /// Whether any scripted press is still under way or yet to come
    pub fn pending_after(&self, now_ms: u64) -> bool {
        self.presses.borrow().iter().any(|&(_, end)| end > now_ms)
    }
}

impl Button for SimButton {
    fn is_pressed(&mut self) -> bool {
        let now = self.time.now_ms();
        self.presses
            .borrow()
            .iter()
            .any(|&(start, end)| (start..end).contains(&now))
    }
}
