//! Shared test infrastructure for asap integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use asap::{Datetime, Duration, Period, TimeSource, TimeUnit};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Datetime>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(Datetime::EPOCH),
        }
    }

    /// Advance time by the given duration
    pub fn advance<U: TimeUnit>(&self, duration: Duration<U>) {
        self.current_time.set(self.current_time.get() + duration);
    }

    pub fn set_time(&self, time: Datetime) {
        self.current_time.set(time);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Datetime {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Shorthand for an instant `seconds` after the epoch
pub fn at(seconds: i64) -> Datetime {
    Datetime::from_timestamp(seconds)
}

/// Period between two raw timestamps
pub fn period(from: i64, to: i64) -> Period {
    Period::new(at(from), at(to))
}

/// Runs the cursor protocol (`begin` until equal to `end`), giving up after
/// `limit` positions so a non-terminating loop fails instead of hanging
pub fn walk_cursor<U: TimeUnit>(period: &Period, step: Duration<U>, limit: usize) -> Vec<i64> {
    let every = period.every(step);
    let end = every.end();
    let mut cursor = every.begin();
    let mut seen = Vec::new();
    while cursor != end && seen.len() < limit {
        seen.push(cursor.current().timestamp());
        cursor.advance();
    }
    seen
}
