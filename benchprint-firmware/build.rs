//! Build script for benchprint-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Checks the embedded job file

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    check_job();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// The job is compiled in with `include_str!`; refuse to build without one
fn check_job() {
    println!("cargo:rerun-if-changed=job.gcode");

    let job_path = Path::new("job.gcode");
    let text = match fs::read_to_string(job_path) {
        Ok(text) => text,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: job.gcode could not be read                              ║\n\
            ║                                                                  ║\n\
            ║  The firmware prints the job embedded from job.gcode in the      ║\n\
            ║  benchprint-firmware directory.                                  ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e
        ),
    };

    let commands = text
        .lines()
        .map(|line| line.split(';').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .count();

    if commands == 0 {
        println!("cargo:warning=job.gcode has no commands; the printer will do nothing");
    }
}
