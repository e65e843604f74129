//! Coil energization sequence
//!
//! Half-step order for a 4-coil unipolar motor (28BYJ-48 and similar).
//! Applying the eight patterns in order advances the rotor one step.

/// One coil energization pattern, `true` = coil energized
pub type CoilPattern = [bool; 4];

/// Patterns per step cycle
pub const PHASES_PER_STEP: usize = 8;

/// The step sequence table, driven forward only
pub const STEP_SEQUENCE: [CoilPattern; PHASES_PER_STEP] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// Pattern left on the coils after the final phase of a cycle
pub const RESTING_PATTERN: CoilPattern = STEP_SEQUENCE[PHASES_PER_STEP - 1];
