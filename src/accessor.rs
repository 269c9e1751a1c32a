//! Step-wise traversal of a [`Period`].
//!
//! [`Period::every`] returns an [`Accessor`], which hands out two kinds of
//! traversal:
//!
//! - [`StepCursor`]: an explicit position with `current`/`advance`/`at_end`.
//!   [`Accessor::begin`] and [`Accessor::end`] give the start position and
//!   the sentinel. Cursors compare equal by position only.
//! - [`Steps`]: a standard [`Iterator`] over the same instants.
//!
//! # Termination
//!
//! Reaching the end is decided by ordering, never by landing exactly on `to`:
//!
//! | step     | yields while  |
//! |----------|---------------|
//! | positive | `now < to`    |
//! | negative | `now > to`    |
//! | zero     | never (empty) |
//!
//! A step that points away from `to` therefore yields nothing, and a step
//! that does not divide the period evenly stops after the last instant
//! before `to`.

use crate::datetime::Datetime;
use crate::duration::Duration;
use crate::period::Period;
use crate::time::TimeUnit;
use crate::types::PeriodError;
use core::iter::FusedIterator;
use heapless::Vec;

/// True once `now` has reached or passed `end` in the direction of `step`.
fn has_reached<U: TimeUnit>(now: Datetime, end: Datetime, step: Duration<U>) -> bool {
    match step.checked_to_seconds() {
        Some(s) if s > 0 => now >= end,
        Some(s) if s < 0 => now <= end,
        // Zero, or too large to ever take a single step.
        _ => true,
    }
}

/// A period paired with a step size.
///
/// Borrows the period it was created from.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accessor<'p, U: TimeUnit> {
    period: &'p Period,
    step: Duration<U>,
}

impl<'p, U: TimeUnit> Accessor<'p, U> {
    pub(crate) fn new(period: &'p Period, step: Duration<U>) -> Self {
        Self { period, step }
    }

    /// Returns the borrowed period.
    #[inline]
    pub fn period(&self) -> &'p Period {
        self.period
    }

    #[inline]
    pub fn step(&self) -> Duration<U> {
        self.step
    }

    /// Cursor positioned at `from`.
    pub fn begin(&self) -> StepCursor<U> {
        self.cursor_at(self.period.from())
    }

    /// Sentinel cursor positioned at `to`.
    pub fn end(&self) -> StepCursor<U> {
        self.cursor_at(self.period.to())
    }

    fn cursor_at(&self, now: Datetime) -> StepCursor<U> {
        StepCursor::new(now, self.period.from(), self.period.to(), self.step)
    }

    /// Iterates over the instants of the period.
    pub fn iter(&self) -> Steps<U> {
        Steps::new(self.begin())
    }

    /// Number of instants the iteration yields.
    pub fn len(&self) -> u64 {
        self.iter().remaining()
    }

    /// True when the iteration yields nothing.
    pub fn is_empty(&self) -> bool {
        self.begin().at_end()
    }

    /// Collects every instant into a fixed-capacity vector.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The period yields more than `N` instants
    pub fn collect_bounded<const N: usize>(&self) -> Result<Vec<Datetime, N>, PeriodError> {
        let mut out = Vec::new();
        for instant in self.iter() {
            out.push(instant)
                .map_err(|_| PeriodError::CapacityExceeded { capacity: N })?;
        }
        Ok(out)
    }
}

impl<U: TimeUnit> IntoIterator for Accessor<'_, U> {
    type Item = Datetime;
    type IntoIter = Steps<U>;

    fn into_iter(self) -> Steps<U> {
        self.iter()
    }
}

impl<U: TimeUnit> IntoIterator for &Accessor<'_, U> {
    type Item = Datetime;
    type IntoIter = Steps<U>;

    fn into_iter(self) -> Steps<U> {
        self.iter()
    }
}

/// An explicit position within a stepped period.
///
/// Holds copies of the bounds and the step, so it does not borrow the period.
/// Equality compares only the current position.
///
/// Stepping past the `i64` range wraps the position, as the operators do,
/// but leaves the cursor permanently [`at_end`](Self::at_end).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCursor<U: TimeUnit> {
    now: Datetime,
    begin: Datetime,
    end: Datetime,
    step: Duration<U>,
    overflowed: bool,
}

impl<U: TimeUnit> StepCursor<U> {
    /// Creates a cursor at `now` over `[begin, end)`.
    pub fn new(now: Datetime, begin: Datetime, end: Datetime, step: Duration<U>) -> Self {
        Self {
            now,
            begin,
            end,
            step,
            overflowed: false,
        }
    }

    /// Returns the current position.
    #[inline]
    pub fn current(&self) -> &Datetime {
        &self.now
    }

    #[inline]
    pub fn begin(&self) -> Datetime {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> Datetime {
        self.end
    }

    #[inline]
    pub fn step(&self) -> Duration<U> {
        self.step
    }

    /// Moves forward by one step and returns the new position.
    ///
    /// Keeps moving past the end if called there; check [`at_end`](Self::at_end).
    pub fn advance(&mut self) -> &Datetime {
        self.step_once();
        &self.now
    }

    /// Moves forward by one step and returns the position before the move.
    pub fn advance_post(&mut self) -> Datetime {
        let prior = self.now;
        self.step_once();
        prior
    }

    fn step_once(&mut self) {
        if self.now.checked_add(self.step).is_none() {
            self.overflowed = true;
        }
        self.now += self.step;
    }

    /// True once the position has reached or passed the end bound, or a
    /// step has overflowed the timestamp range.
    pub fn at_end(&self) -> bool {
        self.overflowed || has_reached(self.now, self.end, self.step)
    }
}

impl<U: TimeUnit> PartialEq for StepCursor<U> {
    fn eq(&self, other: &Self) -> bool {
        self.now == other.now
    }
}

impl<U: TimeUnit> Eq for StepCursor<U> {}

impl<U: TimeUnit> core::fmt::Display for StepCursor<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} in [{}, {}) by {}", self.now, self.begin, self.end, self.step)
    }
}

/// Iterator over the instants of a stepped period.
///
/// Created by [`Accessor::iter`]. Ends at the first instant that reaches the
/// end bound, or when the next step would overflow the timestamp range.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps<U: TimeUnit> {
    cursor: StepCursor<U>,
    exhausted: bool,
}

impl<U: TimeUnit> Steps<U> {
    fn new(cursor: StepCursor<U>) -> Self {
        Self {
            exhausted: cursor.at_end(),
            cursor,
        }
    }

    /// Number of instants left to yield.
    pub fn remaining(&self) -> u64 {
        if self.exhausted || self.cursor.at_end() {
            return 0;
        }
        // has_reached() guarantees the step converts and points toward the end.
        let step = self.cursor.step.to_seconds().unsigned_abs();
        let span = self.cursor.end.timestamp().abs_diff(self.cursor.now.timestamp());
        span.div_ceil(step)
    }
}

impl<U: TimeUnit> Iterator for Steps<U> {
    type Item = Datetime;

    fn next(&mut self) -> Option<Datetime> {
        if self.exhausted || self.cursor.at_end() {
            self.exhausted = true;
            return None;
        }

        let current = self.cursor.now;
        match current.checked_add(self.cursor.step) {
            Some(next) => self.cursor.now = next,
            None => self.exhausted = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<U: TimeUnit> FusedIterator for Steps<U> {}
