use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

use crate::navigation::RequestOutcome;

/// Request counters for a single navigator
#[derive(Debug, Default)]
pub struct NavigationMetrics {
    pub accepted: AtomicU64,
    pub settled: AtomicU64,
    pub dropped_busy: AtomicU64,
    pub dropped_out_of_range: AtomicU64,
    pub dropped_same_page: AtomicU64,
    pub dropped_at_boundary: AtomicU64,
}

impl NavigationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_outcome(&self, outcome: &RequestOutcome) {
        let counter = match outcome {
            RequestOutcome::Accepted { .. } => &self.accepted,
            RequestOutcome::Busy => &self.dropped_busy,
            RequestOutcome::OutOfRange { .. } => &self.dropped_out_of_range,
            RequestOutcome::SamePage => &self.dropped_same_page,
            RequestOutcome::AtBoundary => &self.dropped_at_boundary,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_settle(&self) {
        self.settled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> NavigationStats {
        NavigationStats {
            accepted: self.accepted.load(Ordering::Relaxed),
            settled: self.settled.load(Ordering::Relaxed),
            dropped_busy: self.dropped_busy.load(Ordering::Relaxed),
            dropped_out_of_range: self.dropped_out_of_range.load(Ordering::Relaxed),
            dropped_same_page: self.dropped_same_page.load(Ordering::Relaxed),
            dropped_at_boundary: self.dropped_at_boundary.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            accepted = stats.accepted,
            settled = stats.settled,
            dropped = stats.dropped(),
            dropped_busy = stats.dropped_busy,
            "Navigation session summary"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationStats {
    pub accepted: u64,
    pub settled: u64,
    pub dropped_busy: u64,
    pub dropped_out_of_range: u64,
    pub dropped_same_page: u64,
    pub dropped_at_boundary: u64,
}

impl NavigationStats {
    pub fn dropped(&self) -> u64 {
        self.dropped_busy + self.dropped_out_of_range + self.dropped_same_page + self.dropped_at_boundary
    }
}

/// Measures how long a transition took from acceptance to settle
pub struct TransitionTimer {
    from: u32,
    to: u32,
    start: Instant,
}

impl TransitionTimer {
    pub fn start(from: u32, to: u32) -> Self {
        Self {
            from,
            to,
            start: Instant::now(),
        }
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        tracing::debug!(
            from = self.from,
            to = self.to,
            elapsed_ms = elapsed.as_millis() as u64,
            "Transition completed"
        );
        elapsed
    }
}
