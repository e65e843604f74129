use benchprint_core::traits::Clock;
use embassy_time::Instant;

/// Milliseconds since boot from the embassy time driver
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
