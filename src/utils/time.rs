use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Stand-in for the round trip of a real backend call.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Millisecond stamps that never repeat within one process, so ids derived
/// from them stay unique even when two records are created in the same tick.
#[derive(Debug, Default)]
pub struct MonotonicMillis {
    last: AtomicI64,
}

impl MonotonicMillis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, at: DateTime<Utc>) -> i64 {
        let candidate = at.timestamp_millis();
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let next = candidate.max(current + 1);
            match self
                .last
                .compare_exchange(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }
}
