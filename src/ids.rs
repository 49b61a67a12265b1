//! Injected identifier generation.
//!
//! Requisition ids come from an [`IdSequence`] supplied by the caller rather
//! than from wall-clock timestamps, so creation is deterministic under test
//! and collision-free in production.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

pub trait IdSequence: Send + Sync {
    /// Returns a fresh, never-before-issued requisition id.
    fn next_id(&self) -> String;
}

/// Production default: random v4 UUIDs under the `REQ-` prefix.
#[derive(Debug, Default)]
pub struct UuidIdSequence;

impl IdSequence for UuidIdSequence {
    fn next_id(&self) -> String {
        format!("REQ-{}", Uuid::new_v4())
    }
}

/// Monotonic counter ids (`REQ-0001`, `REQ-0002`, ...). Deterministic, which
/// makes it the sequence of choice in tests and demos.
#[derive(Debug)]
pub struct CounterIdSequence {
    prefix: String,
    next: AtomicU64,
}

impl CounterIdSequence {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for CounterIdSequence {
    fn default() -> Self {
        Self::new("REQ")
    }
}

impl IdSequence for CounterIdSequence {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:04}", self.prefix, n)
    }
}
