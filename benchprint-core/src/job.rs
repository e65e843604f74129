//! Job sources
//!
//! Storage enumeration lives outside the core. A [`JobSource`] hands over
//! the most recent job as a name plus a lazy stream of lines.

use heapless::String;

/// Longest job name kept, in bytes
pub const MAX_JOB_NAME_LEN: usize = 48;

pub type JobName = String<MAX_JOB_NAME_LEN>;

/// One job ready to run
pub struct Job<L> {
    /// Short label for status messages
    ///
    /// Storage-backed sources use the bare file name, not the full path, so
    /// the name fits in [`MAX_JOB_NAME_LEN`] bytes. Longer names are cut at a
    /// character boundary.
    pub name: JobName,
    /// Lines in source order, consumed once
    pub lines: L,
}

impl<L> Job<L> {
    /// Build a job, keeping as much of `name` as fits
    pub fn new(name: &str, lines: L) -> Self {
        Self {
            name: truncated_name(name),
            lines,
        }
    }
}

/// Supplies the job to print when the button is pressed
pub trait JobSource {
    /// A single line of text
    type Line: AsRef<str>;
    /// Lazy line stream for one job
    type Lines: Iterator<Item = Self::Line>;

    /// The most recently modified job, or `None` if there is nothing to print
    fn find_most_recent(&mut self) -> Option<Job<Self::Lines>>;
}

impl<J: JobSource + ?Sized> JobSource for &mut J {
    type Line = J::Line;
    type Lines = J::Lines;

    fn find_most_recent(&mut self) -> Option<Job<Self::Lines>> {
        (**self).find_most_recent()
    }
}

/// A single job compiled into the binary
///
/// Every press reprints the same text.
#[derive(Debug, Clone, Copy)]
pub struct StaticJobSource {
    name: &'static str,
    text: &'static str,
}

impl StaticJobSource {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

impl JobSource for StaticJobSource {
    type Line = &'static str;
    type Lines = core::str::Lines<'static>;

    fn find_most_recent(&mut self) -> Option<Job<Self::Lines>> {
        Some(Job::new(self.name, self.text.lines()))
    }
}

/// A source with nothing to print
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJobs;

impl JobSource for NoJobs {
    type Line = &'static str;
    type Lines = core::iter::Empty<&'static str>;

    fn find_most_recent(&mut self) -> Option<Job<Self::Lines>> {
        None
    }
}

fn truncated_name(name: &str) -> JobName {
    let mut out = JobName::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
