//! Status display trait

/// Receives human-readable state strings
///
/// Fire-and-forget: used both for the display and for any textual log.
pub trait StatusSink {
    fn publish(&mut self, message: &str);
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn publish(&mut self, message: &str) {
        (**self).publish(message)
    }
}
