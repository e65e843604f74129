//! Status output over RTT
//!
//! The controller republishes its state on every poll. New messages are
//! logged at `info`, repeats at `trace`.

use benchprint_core::status::StatusMessage;
use benchprint_core::traits::StatusSink;
use defmt::*;

pub struct DefmtStatusSink {
    last: StatusMessage,
}

impl DefmtStatusSink {
    pub const fn new() -> Self {
        Self {
            last: StatusMessage::new(),
        }
    }
}

impl StatusSink for DefmtStatusSink {
    fn publish(&mut self, message: &str) {
        if self.last.as_str() == message {
            trace!("{=str}", message);
            return;
        }
        info!("{=str}", message);
        self.last.clear();
        // Messages are formatted to fit
        let _ = self.last.push_str(message);
    }
}
