// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of article creation timestamps. Swapped for a fixed clock in tests
/// so listing order is deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
