//! Pet identifiers derived from the wall clock
//!
//! Ids are epoch milliseconds, bumped by one when two are requested within
//! the same millisecond so that every id of a run is unique.

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Default)]
pub struct PetIdGenerator {
    last: AtomicI64,
}

impl PetIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, strictly greater than every id handed out before
    pub fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}
