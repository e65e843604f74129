//! Start/stop button trait

/// The start/stop push button
///
/// Sampled, never event-driven: the job controller calls this once per
/// poll and repeatedly while timing a hold. Polarity (the physical button
/// is active-low) is the implementation's concern.
pub trait Button {
    /// Whether the button is held down right now
    fn is_pressed(&mut self) -> bool;
}

impl<B: Button + ?Sized> Button for &mut B {
    fn is_pressed(&mut self) -> bool {
        (**self).is_pressed()
    }
}
