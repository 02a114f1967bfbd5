use log::{Level, log_enabled, warn};
use std::time::{Duration, Instant};

/// Simple scoped timer for profiling critical sections.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Emits a warning when a step took longer than the frame budget.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f64) -> bool {
    let spent_ms = duration.as_secs_f64() * 1000.0;
    if spent_ms > budget_ms {
        warn!("Step exceeded frame budget: {spent_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_check_reports_overrun() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(20), 16.6));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(2), 16.6));
    }
}
