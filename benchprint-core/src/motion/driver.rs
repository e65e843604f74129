//! Blocking per-axis stepping engine
//!
//! Converts a displacement into a timed sequence of coil patterns. Axes move
//! strictly one at a time and every move runs to completion before control
//! returns: no interpolation, no ramps, no cancellation.

use crate::config::{AxisConfig, MachineConfig};
use crate::traits::{BlockingDelay, CoilBank};

use super::axis::{Axis, AXIS_COUNT};
use super::coil::{CoilPattern, PHASES_PER_STEP, STEP_SEQUENCE};

/// Number of full coil cycles needed to travel `distance`
///
/// `round(|distance| * steps_per_unit)`, computed in double precision so
/// large products keep every step. Direction is not modelled; the sign is
/// dropped. Non-finite distances yield zero steps and results beyond
/// `u32::MAX` saturate.
pub fn step_count(distance: f32, steps_per_unit: u32) -> u32 {
    if !distance.is_finite() {
        return 0;
    }
    let steps = libm::round(libm::fabs(distance as f64) * steps_per_unit as f64);
    // Float-to-int casts saturate
    steps as u32
}

/// Drives the four stepper axes through a shared coil bank
pub struct AxisDriver<B, D> {
    coils: B,
    delay: D,
    axes: [AxisConfig; AXIS_COUNT],
}

impl<B: CoilBank, D: BlockingDelay> AxisDriver<B, D> {
    /// Create a driver from a validated machine configuration
    pub fn new(coils: B, delay: D, config: &MachineConfig) -> Self {
        Self {
            coils,
            delay,
            axes: config.axes,
        }
    }

    /// Configuration in effect for `axis`
    pub fn config(&self, axis: Axis) -> &AxisConfig {
        &self.axes[axis.index()]
    }

    /// Write one pattern to the coils of `axis`
    pub fn step_axis(&mut self, axis: Axis, pattern: &CoilPattern) {
        self.coils.set_coils(axis, pattern);
    }

    /// Move `axis` by `distance` units, blocking until done
    ///
    /// Every step cycles the whole pattern table and waits the axis step
    /// delay after each pattern, so the call occupies
    /// `steps * 8 * step_delay_us` microseconds. Returns the steps issued.
    pub fn move_axis(&mut self, axis: Axis, distance: f32) -> u32 {
        let config = self.axes[axis.index()];
        let steps = step_count(distance, config.steps_per_unit);
        let delay_us = config.step_delay_us();

        for _ in 0..steps {
            for pattern in STEP_SEQUENCE.iter() {
                self.step_axis(axis, pattern);
                self.delay.delay_us(delay_us);
            }
        }

        steps
    }

    /// Time `move_axis(axis, distance)` will block for, in microseconds
    pub fn move_duration_us(&self, axis: Axis, distance: f32) -> u64 {
        let config = self.config(axis);
        let steps = step_count(distance, config.steps_per_unit) as u64;
        steps * PHASES_PER_STEP as u64 * config.step_delay_us() as u64
    }

    pub fn coils(&self) -> &B {
        &self.coils
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Release the coil bank and delay
    pub fn into_parts(self) -> (B, D) {
        (self.coils, self.delay)
    }
}
