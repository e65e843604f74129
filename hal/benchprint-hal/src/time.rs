//! Timing primitives
//!
//! Stepping is paced by busy waits and the stop gesture is timed against a
//! monotonic clock. Neither is interrupt-driven.

/// Non-preemptible delay
///
/// Implementations must spin for the full duration; nothing else runs on
/// the calling thread meanwhile.
pub trait BlockingDelay {
    /// Busy-wait for `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Monotonic millisecond clock
///
/// Uses a shared reference so the same clock can be read by several
/// components.
pub trait Clock {
    /// Milliseconds since a clock-specific reference point (e.g. boot)
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `since`, saturating at zero
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().saturating_sub(since)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<D: BlockingDelay + ?Sized> BlockingDelay for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
