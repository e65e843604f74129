//! Status message formatting
//!
//! Messages are built in a fixed-size buffer so the core stays
//! allocation-free. Text that does not fit is cut at a character boundary.

use core::fmt::{self, Write};

use heapless::String;

use crate::traits::StatusSink;

/// Longest status message in bytes
pub const MAX_STATUS_LEN: usize = 64;

/// A bounded status string
pub type StatusMessage = String<MAX_STATUS_LEN>;

/// Format `args` into a [`StatusMessage`], truncating on overflow
pub fn format_status(args: fmt::Arguments<'_>) -> StatusMessage {
    let mut out = Truncating {
        buf: StatusMessage::new(),
        full: false,
    };
    // Truncating never reports an error
    let _ = out.write_fmt(args);
    out.buf
}

/// Format and publish in one step
pub fn publish_fmt<S: StatusSink + ?Sized>(sink: &mut S, args: fmt::Arguments<'_>) {
    let message = format_status(args);
    sink.publish(&message);
}

struct Truncating {
    buf: StatusMessage,
    full: bool,
}

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}
