//! Configuration type definitions
//!
//! Defaults reproduce the stock machine: 28BYJ-48 steppers geared to
//! 4096 half-steps per unit on every axis.

use core::fmt;

use crate::motion::{Axis, AXIS_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microseconds per second, for deriving step delays from speeds
pub const MICROS_PER_SECOND: u32 = 1_000_000;

/// Default steps per unit of travel (all axes)
pub const DEFAULT_STEPS_PER_UNIT: u32 = 4096;

/// Default time the button must be held to stop a print
pub const DEFAULT_HOLD_TO_STOP_MS: u32 = 5000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An axis has `steps_per_unit == 0`
    ZeroStepsPerUnit(Axis),
    /// Speed must be in `1..=1_000_000` steps/s so the step delay is positive
    SpeedOutOfRange(Axis),
    /// Axis table is not in X, Y, Z, E order
    AxisOrder {
        /// Table slot that holds the wrong axis
        slot: u8,
    },
    /// Stop hold time must be positive
    ZeroHoldTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroStepsPerUnit(axis) => {
                write!(f, "axis {} has zero steps per unit", axis.letter())
            }
            ConfigError::SpeedOutOfRange(axis) => write!(
                f,
                "axis {} speed must be between 1 and {} steps/s",
                axis.letter(),
                MICROS_PER_SECOND
            ),
            ConfigError::AxisOrder { slot } => {
                write!(f, "axis table slot {} is out of X, Y, Z, E order", slot)
            }
            ConfigError::ZeroHoldTime => write!(f, "hold-to-stop time must be positive"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Per-axis stepping configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Axis this entry configures
    pub axis: Axis,
    /// Full coil cycles per unit of travel
    pub steps_per_unit: u32,
    /// Stepping speed (steps/s); sets the inter-phase delay
    pub speed: u32,
    /// Acceleration (steps/s²)
    ///
    /// Validated and stored but never applied: moves run at constant speed.
    pub acceleration: u32,
}

impl AxisConfig {
    pub const fn new(axis: Axis, steps_per_unit: u32, speed: u32, acceleration: u32) -> Self {
        Self {
            axis,
            steps_per_unit,
            speed,
            acceleration,
        }
    }

    /// Stock configuration for `axis`
    pub const fn default_for(axis: Axis) -> Self {
        match axis {
            Axis::X | Axis::Y => Self::new(axis, DEFAULT_STEPS_PER_UNIT, 500, 1000),
            Axis::Z | Axis::E => Self::new(axis, DEFAULT_STEPS_PER_UNIT, 100, 200),
        }
    }

    /// Busy-wait after each coil pattern, in microseconds
    ///
    /// Integer division; a validated config always yields at least 1.
    pub const fn step_delay_us(&self) -> u32 {
        if self.speed == 0 {
            return MICROS_PER_SECOND;
        }
        MICROS_PER_SECOND / self.speed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_unit == 0 {
            return Err(ConfigError::ZeroStepsPerUnit(self.axis));
        }
        if self.speed == 0 || self.speed > MICROS_PER_SECOND {
            return Err(ConfigError::SpeedOutOfRange(self.axis));
        }
        Ok(())
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineConfig {
    /// Axis table in X, Y, Z, E order
    pub axes: [AxisConfig; AXIS_COUNT],
    /// Continuous button hold that stops a print (ms)
    pub hold_to_stop_ms: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            axes: Axis::ALL.map(AxisConfig::default_for),
            hold_to_stop_ms: DEFAULT_HOLD_TO_STOP_MS,
        }
    }
}

impl MachineConfig {
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        &self.axes[axis.index()]
    }

    /// Check every axis entry and the stop gesture timing
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (slot, (entry, expected)) in self.axes.iter().zip(Axis::ALL).enumerate() {
            if entry.axis != expected {
                return Err(ConfigError::AxisOrder { slot: slot as u8 });
            }
            entry.validate()?;
        }
        if self.hold_to_stop_ms == 0 {
            return Err(ConfigError::ZeroHoldTime);
        }
        Ok(())
    }
}
