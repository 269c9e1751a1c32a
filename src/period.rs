//! Intervals between two instants.

use crate::accessor::Accessor;
use crate::datetime::Datetime;
use crate::duration::{Duration, Seconds};
use crate::time::TimeUnit;
use crate::types::PeriodError;

/// The span between two instants, `from` (inclusive) and `to` (exclusive).
///
/// Nothing enforces `from <= to`. A reversed period is representable, is
/// never [`contains`](Period::contains)-true, and iterates only with a
/// negative step (see [`Accessor`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Period {
    from: Datetime,
    to: Datetime,
}

impl Period {
    /// Creates a period. No ordering check is made.
    #[inline]
    pub const fn new(from: Datetime, to: Datetime) -> Self {
        Self { from, to }
    }

    /// Creates a period of `length` starting at `from`. Wraps on overflow.
    pub fn starting_at<U: TimeUnit>(from: Datetime, length: Duration<U>) -> Self {
        Self::new(from, from + length)
    }

    /// Like [`starting_at`](Period::starting_at), but fails instead of wrapping.
    ///
    /// # Errors
    /// * `Overflow` - `from + length` is not a representable instant
    pub fn checked_starting_at<U: TimeUnit>(
        from: Datetime,
        length: Duration<U>,
    ) -> Result<Self, PeriodError> {
        let to = from.checked_add(length).ok_or(PeriodError::Overflow)?;
        Ok(Self::new(from, to))
    }

    #[inline]
    pub const fn from(&self) -> Datetime {
        self.from
    }

    #[inline]
    pub fn set_from(&mut self, from: Datetime) {
        self.from = from;
    }

    #[inline]
    pub const fn to(&self) -> Datetime {
        self.to
    }

    #[inline]
    pub fn set_to(&mut self, to: Datetime) {
        self.to = to;
    }

    /// Elapsed time from `from` to `to`, in seconds. Negative if reversed.
    #[inline]
    pub fn difference(&self) -> Seconds {
        self.to - self.from
    }

    /// Elapsed time from `from` to `to` in unit `U`, truncated toward zero.
    #[inline]
    pub fn difference_in<U: TimeUnit>(&self) -> Duration<U> {
        self.difference().convert()
    }

    /// True when both bounds are the same instant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// True when `from` is later than `to`.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.from > self.to
    }

    /// True when `from <= instant < to`.
    #[inline]
    pub fn contains(&self, instant: Datetime) -> bool {
        self.from <= instant && instant < self.to
    }

    /// Returns a view that steps through this period by `step`.
    ///
    /// The accessor borrows the period, so the period cannot be changed or
    /// dropped while it is in use.
    #[inline]
    pub fn every<U: TimeUnit>(&self, step: Duration<U>) -> Accessor<'_, U> {
        Accessor::new(self, step)
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}
