//! Status messages to the log
//!
//! The controller republishes the state on every poll, so only changes are
//! logged at `info`; repeats go to `trace`.

use benchprint_core::traits::StatusSink;
use tracing::{info, trace};

#[derive(Debug, Default)]
pub struct TracingStatusSink {
    last: Option<String>,
    published: u64,
}

impl TracingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent message
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Messages received, repeats included
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl StatusSink for TracingStatusSink {
    fn publish(&mut self, message: &str) {
        self.published += 1;
        if self.last.as_deref() == Some(message) {
            trace!(status = message, "Status unchanged");
            return;
        }
        info!("{}", message);
        self.last = Some(message.to_string());
    }
}
