//! Press-to-start, hold-to-stop run in virtual time

use benchprint_core::job::JobSource;
use benchprint_core::motion::{Axis, AXIS_COUNT};
use benchprint_core::traits::StatusSink;
use benchprint_core::{
    AxisDriver, HeaterKind, Interpreter, JobController, MachineConfig, PollOutcome, PrinterState,
    ThermalControl,
};
use tracing::{info, warn};

use super::hardware::{MoveRecord, SimButton, SimClock, SimCoilBank, SimDelay, SimHeater};
use super::SimTime;
use crate::config::{HostConfig, SimConfig};

pub type SimController = JobController<SimCoilBank, SimDelay, SimHeater, SimButton, SimClock>;

/// What a simulated run did
#[derive(Debug, Clone)]
pub struct SimReport {
    /// Every poll outcome other than [`PollOutcome::Quiet`], in order
    pub outcomes: Vec<PollOutcome>,
    pub final_state: PrinterState,
    /// Simulated time at the end of the run
    pub elapsed_ms: u64,
    pub coil_writes: [u64; AXIS_COUNT],
    pub moves: Vec<MoveRecord>,
    pub extruder_on: bool,
    pub bed_on: bool,
}

/// Wire the simulated hardware into a controller
pub fn build_controller(
    machine: &MachineConfig,
    sim: &SimConfig,
    time: &SimTime,
    button: SimButton,
) -> SimController {
    let interpreter = Interpreter::new(
        AxisDriver::new(SimCoilBank::new(), SimDelay::new(time.clone()), machine),
        ThermalControl::new(
            SimHeater::new(HeaterKind::Extruder),
            SimHeater::new(HeaterKind::Bed),
        ),
    );
    JobController::new(
        interpreter,
        button,
        SimClock::new(time.clone(), sim.clock_tick_us),
        machine,
    )
}

/// Press the button to start the newest job, then hold it to stop
///
/// The stop hold is scripted once the job completes. The run ends on a
/// stop, when there is no job, or when nothing else is scripted.
pub fn run_scenario<J, S>(config: &HostConfig, jobs: &mut J, status: &mut S) -> SimReport
where
    J: JobSource + ?Sized,
    S: StatusSink + ?Sized,
{
    let sim = &config.sim;
    let time = SimTime::new();
    let button = SimButton::new(time.clone());
    button.press(sim.start_press_at_ms, sim.start_press_ms);

    let mut controller = build_controller(&config.machine, sim, &time, button.clone());
    let mut outcomes = Vec::new();

    loop {
        let outcome = controller.poll(jobs, status);
        if outcome != PollOutcome::Quiet {
            outcomes.push(outcome);
        }

        match outcome {
            PollOutcome::Quiet => {
                if !button.pending_after(time.now_ms()) {
                    break;
                }
                if time.now_ms() >= sim.run_limit_ms {
                    warn!(limit_ms = sim.run_limit_ms, "Simulation time limit reached");
                    break;
                }
                time.advance_ms(sim.poll_interval_ms);
            }
            PollOutcome::NoJob => {
                warn!("No job to print");
                break;
            }
            PollOutcome::JobCompleted(summary) => {
                info!(
                    executed = summary.executed,
                    skipped = summary.skipped,
                    steps = summary.steps,
                    at_ms = time.now_ms(),
                    "Job complete"
                );
                button.press(time.now_ms() + sim.stop_after_ms, sim.stop_hold_ms);
            }
            PollOutcome::HoldReleased { held_ms } => {
                info!(held_ms, "Button released before stop time");
            }
            PollOutcome::Stopped => break,
        }
    }

    report(&controller, outcomes, &time)
}

fn report(controller: &SimController, outcomes: Vec<PollOutcome>, time: &SimTime) -> SimReport {
    let interpreter = controller.interpreter();
    let coils = interpreter.axes().coils();
    let thermal = interpreter.thermal();

    SimReport {
        outcomes,
        final_state: controller.state(),
        elapsed_ms: time.now_ms(),
        coil_writes: Axis::ALL.map(|axis| coils.writes(axis)),
        moves: coils.moves().to_vec(),
        extruder_on: thermal.relay_on(HeaterKind::Extruder),
        bed_on: thermal.relay_on(HeaterKind::Bed),
    }
}
