//! Stepper coil output trait

use crate::motion::{Axis, CoilPattern};

/// The sixteen coil outputs, four per axis
///
/// Implementations drive the physical lines for one axis to match the
/// pattern. Writing is a pure side effect and cannot fail; an unknown axis
/// cannot be expressed.
pub trait CoilBank {
    /// Energize the four coils of `axis` according to `pattern`
    fn set_coils(&mut self, axis: Axis, pattern: &CoilPattern);
}

impl<B: CoilBank + ?Sized> CoilBank for &mut B {
    fn set_coils(&mut self, axis: Axis, pattern: &CoilPattern) {
        (**self).set_coils(axis, pattern)
    }
}
