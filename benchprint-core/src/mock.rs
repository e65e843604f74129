//! Test doubles shared by the unit tests
//!
//! Coils and heaters append to one [`Journal`] so tests can check the order
//! in which hardware was touched. Time is a shared microsecond counter that
//! delays, clocks and buttons all read.

use core::cell::{Cell, RefCell};

use heapless::Vec;

use crate::motion::{Axis, CoilPattern};
use crate::status::StatusMessage;
use crate::thermal::HeaterKind;
use crate::traits::{BlockingDelay, Button, Clock, CoilBank, HeaterOutput, StatusSink};

/// One observable hardware action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// Consecutive pattern writes to one axis
    Coils(Axis, u32),
    /// Relay output written
    Relay(HeaterKind, bool),
}

pub struct Journal {
    entries: RefCell<Vec<Entry, 32>>,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<Entry, 32> {
        self.entries.borrow().clone()
    }

    fn coil_write(&self, axis: Axis) {
        let mut entries = self.entries.borrow_mut();
        if let Some(Entry::Coils(last, count)) = entries.last_mut() {
            if *last == axis {
                *count += 1;
                return;
            }
        }
        entries.push(Entry::Coils(axis, 1)).expect("journal full");
    }

    fn relay(&self, kind: HeaterKind, on: bool) {
        self.entries
            .borrow_mut()
            .push(Entry::Relay(kind, on))
            .expect("journal full");
    }
}

pub struct MockCoils<'a> {
    journal: &'a Journal,
    writes: [u32; 4],
    first: [Option<CoilPattern>; 4],
    last: [Option<CoilPattern>; 4],
}

impl<'a> MockCoils<'a> {
    pub fn new(journal: &'a Journal) -> Self {
        Self {
            journal,
            writes: [0; 4],
            first: [None; 4],
            last: [None; 4],
        }
    }

    pub fn writes(&self, axis: Axis) -> u32 {
        self.writes[axis.index()]
    }

    pub fn first(&self, axis: Axis) -> Option<CoilPattern> {
        self.first[axis.index()]
    }

    pub fn last(&self, axis: Axis) -> Option<CoilPattern> {
        self.last[axis.index()]
    }
}

impl CoilBank for MockCoils<'_> {
    fn set_coils(&mut self, axis: Axis, pattern: &CoilPattern) {
        let i = axis.index();
        self.writes[i] += 1;
        self.first[i].get_or_insert(*pattern);
        self.last[i] = Some(*pattern);
        self.journal.coil_write(axis);
    }
}

pub struct MockHeater<'a> {
    kind: HeaterKind,
    journal: &'a Journal,
    on: bool,
    pub writes: u32,
}

impl<'a> MockHeater<'a> {
    pub fn new(kind: HeaterKind, journal: &'a Journal) -> Self {
        Self {
            kind,
            journal,
            on: false,
            writes: 0,
        }
    }
}

impl HeaterOutput for MockHeater<'_> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.writes += 1;
        self.journal.relay(self.kind, on);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Delay that records what it was asked to wait
///
/// When attached to a time base it also advances it.
#[derive(Default)]
pub struct MockDelay<'a> {
    time_us: Option<&'a Cell<u64>>,
    pub calls: u32,
    pub total_us: u64,
}

impl<'a> MockDelay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_time(time_us: &'a Cell<u64>) -> Self {
        Self {
            time_us: Some(time_us),
            ..Self::default()
        }
    }
}

impl BlockingDelay for MockDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += us as u64;
        if let Some(time) = self.time_us {
            time.set(time.get() + us as u64);
        }
    }
}

/// Clock that moves forward `tick_us` on every read
pub struct TickingClock<'a> {
    time_us: &'a Cell<u64>,
    tick_us: u64,
}

impl<'a> TickingClock<'a> {
    pub fn new(time_us: &'a Cell<u64>, tick_us: u64) -> Self {
        Self { time_us, tick_us }
    }
}

impl Clock for TickingClock<'_> {
    fn now_ms(&self) -> u64 {
        let now = self.time_us.get();
        self.time_us.set(now + self.tick_us);
        now / 1000
    }
}

/// Button held during fixed windows of the shared time base
pub struct ScriptedButton<'a> {
    time_us: &'a Cell<u64>,
    /// `[start_ms, end_ms)` press windows
    windows: Vec<(u64, u64), 8>,
    pub samples: u32,
}

impl<'a> ScriptedButton<'a> {
    pub fn new(time_us: &'a Cell<u64>) -> Self {
        Self {
            time_us,
            windows: Vec::new(),
            samples: 0,
        }
    }

    /// Hold the button from `start_ms` for `duration_ms`
    pub fn press(&mut self, start_ms: u64, duration_ms: u64) {
        self.windows
            .push((start_ms, start_ms + duration_ms))
            .expect("too many presses");
    }
}

impl Button for ScriptedButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.samples += 1;
        let now_ms = self.time_us.get() / 1000;
        self.windows
            .iter()
            .any(|(start, end)| (*start..*end).contains(&now_ms))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub messages: Vec<StatusMessage, 64>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(|m| m.as_str())
    }
}

impl StatusSink for RecordingSink {
    fn publish(&mut self, message: &str) {
        let mut copy = StatusMessage::new();
        // Messages are already bounded by the formatter
        let _ = copy.push_str(message);
        let _ = self.messages.push(copy);
    }
}
