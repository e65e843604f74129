//! Command interpreter
//!
//! Turns each line into a [`Command`] and dispatches it synchronously to the
//! axis driver or the heaters. A job runs start to finish inside
//! [`Interpreter::run_source`]; there is no checkpoint to resume from.

use crate::gcode::{parse_line, Command};
use crate::motion::AxisDriver;
use crate::thermal::{HeaterKind, ThermalControl};
use crate::traits::{BlockingDelay, CoilBank, HeaterOutput, StatusSink};

/// What one job run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSummary {
    /// Recognized commands executed
    pub executed: u32,
    /// Non-blank lines dropped as unrecognized or malformed
    pub skipped: u32,
    /// Full coil cycles issued across all axes
    pub steps: u64,
}

/// Owns the actuators a job drives
pub struct Interpreter<B, D, H> {
    axes: AxisDriver<B, D>,
    thermal: ThermalControl<H>,
}

impl<B, D, H> Interpreter<B, D, H>
where
    B: CoilBank,
    D: BlockingDelay,
    H: HeaterOutput,
{
    pub fn new(axes: AxisDriver<B, D>, thermal: ThermalControl<H>) -> Self {
        Self { axes, thermal }
    }

    pub fn axes(&self) -> &AxisDriver<B, D> {
        &self.axes
    }

    pub fn thermal(&self) -> &ThermalControl<H> {
        &self.thermal
    }

    pub fn thermal_mut(&mut self) -> &mut ThermalControl<H> {
        &mut self.thermal
    }

    /// Carry out one command, returning the steps it issued
    pub fn execute<S: StatusSink + ?Sized>(&mut self, command: Command, status: &mut S) -> u32 {
        match command {
            Command::Move { axis, distance } => self.axes.move_axis(axis, distance),
            Command::SetExtruderTemp { celsius } => {
                self.thermal
                    .set_temperature(HeaterKind::Extruder, celsius, status);
                0
            }
            Command::SetBedTemp { celsius } => {
                self.thermal.set_temperature(HeaterKind::Bed, celsius, status);
                0
            }
            Command::Unrecognized => 0,
        }
    }

    /// Run every line of a job in order, blocking until the source is
    /// exhausted
    ///
    /// Blank lines are ignored; unrecognized lines are counted and dropped
    /// without any status output.
    pub fn run_source<I, S>(&mut self, lines: I, status: &mut S) -> RunSummary
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: StatusSink + ?Sized,
    {
        let mut summary = RunSummary::default();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let command = parse_line(line);
            if command.is_recognized() {
                summary.steps += self.execute(command, status) as u64;
                summary.executed += 1;
            } else {
                summary.skipped += 1;
            }
        }

        summary
    }

    /// Release the axis driver and heaters
    pub fn into_parts(self) -> (AxisDriver<B, D>, ThermalControl<H>) {
        (self.axes, self.thermal)
    }
}
