//! benchprint - relay-heated stepper printer firmware
//!
//! Runs the newest (and only) embedded job when the start/stop button is
//! pressed; holding the button afterwards switches both heaters off.
//!
//! # Wiring
//!
//! | Function        | GPIO     |
//! |-----------------|----------|
//! | X coils         | 0-3      |
//! | Y coils         | 4-7      |
//! | Z coils         | 8-11     |
//! | E coils         | 12-15    |
//! | Extruder relay  | 16       |
//! | Bed relay       | 17       |
//! | Button (to GND) | 18       |
//!
//! Coils drive ULN2003 inputs (active-high). The button uses the internal
//! pull-up.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level as PinLevel, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use benchprint_core::{
    AxisDriver, Interpreter, JobController, MachineConfig, PollOutcome, StaticJobSource,
    ThermalControl,
};
use benchprint_drivers::{
    CoilStepper, EhDelay, EhInput, EhOutput, PinButton, PinCoilBank, RelayHeater,
};
use benchprint_hal::Level;

mod clock;
mod status;

use crate::clock::UptimeClock;
use crate::status::DefmtStatusSink;

/// Job compiled into the firmware image
const JOB_TEXT: &str = include_str!("../job.gcode");

type OutputLine = EhOutput<Output<'static>>;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("benchprint firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = MachineConfig::default();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid machine configuration: {}", e);
    }

    let line = |pin: Output<'static>| -> OutputLine { EhOutput::new(pin, Level::Low) };

    // Coil lines, in sequence-table order per motor
    let coils = PinCoilBank::new([
        CoilStepper::new([
            line(Output::new(p.PIN_0, PinLevel::Low)),
            line(Output::new(p.PIN_1, PinLevel::Low)),
            line(Output::new(p.PIN_2, PinLevel::Low)),
            line(Output::new(p.PIN_3, PinLevel::Low)),
        ]),
        CoilStepper::new([
            line(Output::new(p.PIN_4, PinLevel::Low)),
            line(Output::new(p.PIN_5, PinLevel::Low)),
            line(Output::new(p.PIN_6, PinLevel::Low)),
            line(Output::new(p.PIN_7, PinLevel::Low)),
        ]),
        CoilStepper::new([
            line(Output::new(p.PIN_8, PinLevel::Low)),
            line(Output::new(p.PIN_9, PinLevel::Low)),
            line(Output::new(p.PIN_10, PinLevel::Low)),
            line(Output::new(p.PIN_11, PinLevel::Low)),
        ]),
        CoilStepper::new([
            line(Output::new(p.PIN_12, PinLevel::Low)),
            line(Output::new(p.PIN_13, PinLevel::Low)),
            line(Output::new(p.PIN_14, PinLevel::Low)),
            line(Output::new(p.PIN_15, PinLevel::Low)),
        ]),
    ]);
    info!("Stepper coils initialized");

    let thermal = ThermalControl::new(
        RelayHeater::new_active_high(line(Output::new(p.PIN_16, PinLevel::Low))),
        RelayHeater::new_active_high(line(Output::new(p.PIN_17, PinLevel::Low))),
    );
    info!("Heater relays off");

    let button = PinButton::active_low(EhInput::new(Input::new(p.PIN_18, Pull::Up)));

    let interpreter = Interpreter::new(
        AxisDriver::new(coils, EhDelay::new(Delay), &config),
        thermal,
    );
    let mut controller = JobController::new(interpreter, button, UptimeClock, &config);

    let mut jobs = StaticJobSource::new("job.gcode", JOB_TEXT);
    let mut status = DefmtStatusSink::new();

    info!("Ready, press the button to print");

    controller.run_forever(&mut jobs, &mut status, |outcome| match outcome {
        PollOutcome::NoJob => warn!("No job to print"),
        PollOutcome::JobCompleted(summary) => info!(
            "Job complete: {} commands, {} skipped, {} steps",
            summary.executed, summary.skipped, summary.steps
        ),
        PollOutcome::HoldReleased { held_ms } => {
            debug!("Button released after {} ms", held_ms)
        }
        PollOutcome::Stopped => info!("Stopped by button hold"),
        PollOutcome::Quiet => {}
    })
}
