use anyhow::Context as _;
use benchprint_core::Axis;
use benchprint_host::{logging, sim, DirectoryJobSource, HostConfig, TracingStatusSink};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config_path = HostConfig::config_path();
    let config = HostConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    info!(
        job_dir = %config.job_dir.display(),
        extension = %config.job_extension,
        hold_to_stop_ms = config.machine.hold_to_stop_ms,
        "Starting simulated printer"
    );

    let mut jobs = DirectoryJobSource::new(&config.job_dir, &config.job_extension);
    let mut status = TracingStatusSink::new();

    let report = sim::run_scenario(&config, &mut jobs, &mut status);

    for axis in Axis::ALL {
        info!(
            axis = %axis.letter(),
            writes = report.coil_writes[axis.index()],
            "Coil activity"
        );
    }
    info!(
        state = ?report.final_state,
        elapsed_ms = report.elapsed_ms,
        moves = report.moves.len(),
        extruder_on = report.extruder_on,
        bed_on = report.bed_on,
        "Simulation finished"
    );

    Ok(())
}
