use log::{log_enabled, Level};
use std::time::Instant;

/// Scoped timer emitting trace spans around a simulation phase.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("{label}: begin");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("{}: {} µs", self.label, self.start.elapsed().as_micros());
        }
    }
}
