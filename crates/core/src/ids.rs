//! Timestamp-based submission ids.

use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out millisecond-timestamp ids that strictly increase within the
/// process, even when several ids are requested within the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current Unix time in milliseconds, or one past the
    /// previously issued id if the clock has not advanced.
    pub fn next_id(&self) -> String {
        self.next_after(chrono::Utc::now().timestamp_millis())
            .to_string()
    }

    fn next_after(&self, now_millis: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}
