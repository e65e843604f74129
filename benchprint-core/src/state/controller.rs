//! Job controller
//!
//! Owns the printer state and arbitrates the start/stop button against the
//! interpreter. Everything runs on the caller's thread:
//!
//! - a press while idle runs the newest job to completion, then marks the
//!   printer as printing;
//! - a continuous hold while printing switches both heaters off and returns
//!   to idle;
//! - every poll publishes the current state.
//!
//! The button is not sampled while a job runs, so the stop hold can only
//! begin once the job has finished.

use crate::config::MachineConfig;
use crate::interpreter::{Interpreter, RunSummary};
use crate::job::JobSource;
use crate::status::publish_fmt;
use crate::traits::{BlockingDelay, Button, Clock, CoilBank, HeaterOutput, StatusSink};

use super::events::Event;
use super::machine::PrinterState;

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// No transition was attempted
    Quiet,
    /// Pressed while idle but the job source had nothing
    NoJob,
    /// A job ran to completion
    JobCompleted(RunSummary),
    /// Button let go before the stop time
    HoldReleased {
        /// How long the button was held
        held_ms: u64,
    },
    /// Hold reached the stop time; heaters are off
    Stopped,
}

/// The printer context: state, actuators, button and clock
pub struct JobController<B, D, H, P, C> {
    state: PrinterState,
    interpreter: Interpreter<B, D, H>,
    button: P,
    clock: C,
    hold_to_stop_ms: u64,
    /// Button level at the previous poll, for press edges
    was_pressed: bool,
}

impl<B, D, H, P, C> JobController<B, D, H, P, C>
where
    B: CoilBank,
    D: BlockingDelay,
    H: HeaterOutput,
    P: Button,
    C: Clock,
{
    pub fn new(
        interpreter: Interpreter<B, D, H>,
        button: P,
        clock: C,
        config: &MachineConfig,
    ) -> Self {
        Self {
            state: PrinterState::Idle,
            interpreter,
            button,
            clock,
            hold_to_stop_ms: config.hold_to_stop_ms as u64,
            was_pressed: false,
        }
    }

    pub fn state(&self) -> PrinterState {
        self.state
    }

    pub fn interpreter(&self) -> &Interpreter<B, D, H> {
        &self.interpreter
    }

    pub fn button(&self) -> &P {
        &self.button
    }

    /// One poll cycle
    pub fn poll<J, S>(&mut self, jobs: &mut J, status: &mut S) -> PollOutcome
    where
        J: JobSource + ?Sized,
        S: StatusSink + ?Sized,
    {
        let pressed = self.button.is_pressed();
        let press_edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        let outcome = match self.state {
            PrinterState::Idle if press_edge => self.start_job(jobs, status),
            PrinterState::Printing if pressed => self.watch_hold(status),
            _ => PollOutcome::Quiet,
        };

        status.publish(self.state.status_message());
        outcome
    }

    /// Poll for the life of the process, handing each outcome to `observe`
    pub fn run_forever<J, S, F>(&mut self, jobs: &mut J, status: &mut S, mut observe: F) -> !
    where
        J: JobSource + ?Sized,
        S: StatusSink + ?Sized,
        F: FnMut(PollOutcome),
    {
        loop {
            let outcome = self.poll(jobs, status);
            observe(outcome);
        }
    }

    fn start_job<J, S>(&mut self, jobs: &mut J, status: &mut S) -> PollOutcome
    where
        J: JobSource + ?Sized,
        S: StatusSink + ?Sized,
    {
        let Some(job) = jobs.find_most_recent() else {
            return PollOutcome::NoJob;
        };

        publish_fmt(status, format_args!("Starting to print: {}", job.name));
        let summary = self.interpreter.run_source(job.lines, status);
        self.state = self.state.transition(Event::JobFinished);

        PollOutcome::JobCompleted(summary)
    }

    /// Busy-poll the button until it is released or held long enough
    fn watch_hold<S: StatusSink + ?Sized>(&mut self, status: &mut S) -> PollOutcome {
        let start = self.clock.now_ms();

        loop {
            if !self.button.is_pressed() {
                return PollOutcome::HoldReleased {
                    held_ms: self.clock.elapsed_ms(start),
                };
            }
            if self.clock.elapsed_ms(start) >= self.hold_to_stop_ms {
                break;
            }
        }

        status.publish("Stopping...");
        self.interpreter.thermal_mut().all_off(status);
        self.state = self.state.transition(Event::StopHeld);

        PollOutcome::Stopped
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::job::{NoJobs, StaticJobSource};
    use crate::mock::{
        Journal, MockCoils, MockDelay, MockHeater, RecordingSink, ScriptedButton, TickingClock,
    };
    use crate::motion::{Axis, AxisDriver};
    use crate::thermal::{HeaterKind, ThermalControl};

    type TestController<'a> = JobController<
        MockCoils<'a>,
        MockDelay<'a>,
        MockHeater<'a>,
        ScriptedButton<'a>,
        TickingClock<'a>,
    >;

    fn job() -> StaticJobSource {
        StaticJobSource::new("demo.gcode", "G1X1.0\nM104 S210\nM140 S60\nG1Y2.0\n")
    }

    /// 10 ms pass on every clock read
    const TICK_US: u64 = 10_000;

    fn controller<'a>(
        journal: &'a Journal,
        time_us: &'a Cell<u64>,
        button: ScriptedButton<'a>,
    ) -> TestController<'a> {
        let mut config = MachineConfig::default();
        for axis in config.axes.iter_mut() {
            axis.steps_per_unit = 4;
        }
        let interpreter = Interpreter::new(
            AxisDriver::new(MockCoils::new(journal), MockDelay::on_time(time_us), &config),
            ThermalControl::new(
                MockHeater::new(HeaterKind::Extruder, journal),
                MockHeater::new(HeaterKind::Bed, journal),
            ),
        );
        JobController::new(
            interpreter,
            button,
            TickingClock::new(time_us, TICK_US),
            &config,
        )
    }

    fn now_ms(time_us: &Cell<u64>) -> u64 {
        time_us.get() / 1000
    }

    #[test]
    fn test_idle_without_press() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut ctl = controller(&journal, &time, ScriptedButton::new(&time));
        let mut status = RecordingSink::new();

        assert_eq!(ctl.poll(&mut job(), &mut status), PollOutcome::Quiet);
        assert_eq!(ctl.state(), PrinterState::Idle);
        assert_eq!(status.messages, ["Printer is idle"]);
    }

    #[test]
    fn test_press_runs_job_then_reports_printing() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();
        let mut jobs = job();

        let outcome = ctl.poll(&mut jobs, &mut status);

        assert_eq!(
            outcome,
            PollOutcome::JobCompleted(RunSummary {
                executed: 4,
                skipped: 0,
                steps: 4 + 8
            })
        );
        assert_eq!(ctl.state(), PrinterState::Printing);
        assert_eq!(
            status.messages,
            [
                "Starting to print: demo.gcode",
                "Heating extruder to 210.0C",
                "Heating bed to 60.0C",
                "Printing in progress"
            ]
        );
        let coils = ctl.interpreter().axes().coils();
        assert_eq!(coils.writes(Axis::X), 4 * 8);
        assert_eq!(coils.writes(Axis::Y), 8 * 8);
    }

    #[test]
    fn test_button_not_sampled_during_job() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();

        ctl.poll(&mut job(), &mut status);

        // One sample at the top of the poll; the job itself never looks
        assert_eq!(ctl.button().samples, 1);
        // The job advanced time well past the press window
        assert!(now_ms(&time) > 5);
    }

    #[test]
    fn test_no_job_stays_idle_silently() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();

        assert_eq!(ctl.poll(&mut NoJobs, &mut status), PollOutcome::NoJob);
        assert_eq!(ctl.state(), PrinterState::Idle);
        assert_eq!(status.messages, ["Printer is idle"]);
    }

    #[test]
    fn test_level_without_edge_does_not_start() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 1000);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();

        assert_eq!(ctl.poll(&mut NoJobs, &mut status), PollOutcome::NoJob);
        // Still held: not a new press
        assert_eq!(ctl.poll(&mut job(), &mut status), PollOutcome::Quiet);
        assert_eq!(ctl.state(), PrinterState::Idle);
    }

    #[test]
    fn test_long_hold_stops_and_cools() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        button.press(10_000, 6_000);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();
        let mut jobs = job();

        ctl.poll(&mut jobs, &mut status);
        assert_eq!(ctl.state(), PrinterState::Printing);

        time.set(10_000 * 1000);
        status.messages.clear();
        assert_eq!(ctl.poll(&mut jobs, &mut status), PollOutcome::Stopped);

        assert_eq!(ctl.state(), PrinterState::Idle);
        let thermal = ctl.interpreter().thermal();
        assert!(!thermal.relay_on(HeaterKind::Extruder));
        assert!(!thermal.relay_on(HeaterKind::Bed));
        assert_eq!(
            status.messages,
            [
                "Stopping...",
                "Turning off extruder heater",
                "Turning off heated bed",
                "Printer is idle"
            ]
        );
        // Stopped at the threshold, not at release
        let elapsed = now_ms(&time) - 10_000;
        assert!((5_000..5_100).contains(&elapsed));

        // Button still held after the stop: no restart
        assert_eq!(ctl.poll(&mut jobs, &mut status), PollOutcome::Quiet);
        assert_eq!(ctl.state(), PrinterState::Idle);
    }

    #[test]
    fn test_short_hold_does_nothing() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        button.press(10_000, 4_900);
        // Re-press right after release: the timer starts from zero again
        button.press(14_910, 4_900);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();
        let mut jobs = job();

        ctl.poll(&mut jobs, &mut status);

        time.set(10_000 * 1000);
        status.messages.clear();
        match ctl.poll(&mut jobs, &mut status) {
            PollOutcome::HoldReleased { held_ms } => assert!(held_ms < 5_000),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(ctl.state(), PrinterState::Printing);

        time.set(14_910 * 1000);
        assert!(matches!(
            ctl.poll(&mut jobs, &mut status),
            PollOutcome::HoldReleased { .. }
        ));

        assert_eq!(ctl.state(), PrinterState::Printing);
        assert!(ctl.interpreter().thermal().relay_on(HeaterKind::Extruder));
        assert!(ctl.interpreter().thermal().relay_on(HeaterKind::Bed));
        assert_eq!(
            status.messages,
            ["Printing in progress", "Printing in progress"]
        );
    }

    #[test]
    fn test_restart_after_stop() {
        let journal = Journal::new();
        let time = Cell::new(0);
        let mut button = ScriptedButton::new(&time);
        button.press(0, 5);
        button.press(10_000, 5_500);
        button.press(20_000, 5);
        let mut ctl = controller(&journal, &time, button);
        let mut status = RecordingSink::new();
        let mut jobs = job();

        ctl.poll(&mut jobs, &mut status);
        time.set(10_000 * 1000);
        assert_eq!(ctl.poll(&mut jobs, &mut status), PollOutcome::Stopped);

        // Released in between, then a fresh press starts the job again
        time.set(16_000 * 1000);
        assert_eq!(ctl.poll(&mut jobs, &mut status), PollOutcome::Quiet);
        time.set(20_000 * 1000);
        assert!(matches!(
            ctl.poll(&mut jobs, &mut status),
            PollOutcome::JobCompleted(_)
        ));
        assert_eq!(ctl.state(), PrinterState::Printing);
    }
}
