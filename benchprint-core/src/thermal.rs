//! Binary heater control
//!
//! Each heater is a relay: a positive target switches it on, anything else
//! switches it off. There is no sensor and no regulation loop; the target
//! value only gates the relay.

use core::fmt;

use crate::status::publish_fmt;
use crate::traits::{HeaterOutput, StatusSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which heater a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeaterKind {
    Extruder,
    Bed,
}

impl HeaterKind {
    pub const fn label(self) -> &'static str {
        match self {
            HeaterKind::Extruder => "extruder",
            HeaterKind::Bed => "bed",
        }
    }
}

/// One relay-switched heater
pub struct HeaterChannel<H> {
    kind: HeaterKind,
    output: H,
    relay_on: bool,
}

impl<H: HeaterOutput> HeaterChannel<H> {
    /// Wrap an output, forcing it off
    pub fn new(kind: HeaterKind, mut output: H) -> Self {
        output.set_on(false);
        Self {
            kind,
            output,
            relay_on: false,
        }
    }

    pub fn kind(&self) -> HeaterKind {
        self.kind
    }

    pub fn relay_on(&self) -> bool {
        self.relay_on
    }

    pub fn output(&self) -> &H {
        &self.output
    }

    /// Drive the relay, touching the output only on a change
    fn switch(&mut self, on: bool) {
        if on != self.relay_on {
            self.output.set_on(on);
            self.relay_on = on;
        }
    }
}

/// The extruder and bed heater pair
pub struct ThermalControl<H> {
    extruder: HeaterChannel<H>,
    bed: HeaterChannel<H>,
}

impl<H: HeaterOutput> ThermalControl<H> {
    /// Take ownership of both relay outputs; both start off
    pub fn new(extruder: H, bed: H) -> Self {
        Self {
            extruder: HeaterChannel::new(HeaterKind::Extruder, extruder),
            bed: HeaterChannel::new(HeaterKind::Bed, bed),
        }
    }

    pub fn channel(&self, kind: HeaterKind) -> &HeaterChannel<H> {
        match kind {
            HeaterKind::Extruder => &self.extruder,
            HeaterKind::Bed => &self.bed,
        }
    }

    fn channel_mut(&mut self, kind: HeaterKind) -> &mut HeaterChannel<H> {
        match kind {
            HeaterKind::Extruder => &mut self.extruder,
            HeaterKind::Bed => &mut self.bed,
        }
    }

    pub fn relay_on(&self, kind: HeaterKind) -> bool {
        self.channel(kind).relay_on()
    }

    /// Switch `kind` according to the sign of `celsius`
    ///
    /// Publishes exactly one status message per call, whether or not the
    /// relay changed.
    pub fn set_temperature<S: StatusSink + ?Sized>(
        &mut self,
        kind: HeaterKind,
        celsius: f32,
        status: &mut S,
    ) {
        let on = celsius > 0.0;
        self.channel_mut(kind).switch(on);

        match (kind, on) {
            (_, true) => publish_fmt(
                status,
                format_args!("Heating {} to {}C", kind.label(), Celsius(celsius)),
            ),
            (HeaterKind::Extruder, false) => status.publish("Turning off extruder heater"),
            (HeaterKind::Bed, false) => status.publish("Turning off heated bed"),
        }
    }

    /// Switch both heaters off, extruder first
    pub fn all_off<S: StatusSink + ?Sized>(&mut self, status: &mut S) {
        self.set_temperature(HeaterKind::Extruder, 0.0, status);
        self.set_temperature(HeaterKind::Bed, 0.0, status);
    }

    /// Release both outputs
    pub fn into_outputs(self) -> (H, H) {
        (self.extruder.output, self.bed.output)
    }
}

/// Target temperature as shown in status messages
///
/// Always carries a decimal point: `200.0`, `212.5`.
struct Celsius(f32);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if libm::truncf(self.0) == self.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
