//! Deterministic ids, for tests and local demos.

use std::sync::atomic::{AtomicI64, Ordering};

use postbox_core::ports::IdGenerator;

/// Hands out `start, start + 1, start + 2, ...`.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
