//! Absolute instants as flat epoch seconds.

use crate::duration::{Duration, Seconds};
use crate::time::TimeUnit;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An instant, stored as seconds since the Unix epoch.
///
/// No time zone or calendar applies: adding a [`Months`](crate::Months)
/// always adds exactly 30 days. Operators wrap on overflow; the `checked_*`
/// methods return `None` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Datetime {
    seconds: i64,
}

impl Datetime {
    /// The epoch itself (timestamp zero).
    pub const EPOCH: Self = Self::from_timestamp(0);

    /// Creates an instant `seconds` after the epoch (before it, if negative).
    #[inline]
    pub const fn from_timestamp(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Returns seconds since the epoch.
    #[inline]
    pub const fn timestamp(self) -> i64 {
        self.seconds
    }

    /// Adds duration to instant, returns None on overflow.
    pub fn checked_add<U: TimeUnit>(self, duration: Duration<U>) -> Option<Self> {
        let delta = duration.checked_to_seconds()?;
        self.seconds.checked_add(delta).map(Self::from_timestamp)
    }

    /// Subtracts duration from instant, returns None on overflow.
    pub fn checked_sub<U: TimeUnit>(self, duration: Duration<U>) -> Option<Self> {
        let delta = duration.checked_to_seconds()?;
        self.seconds.checked_sub(delta).map(Self::from_timestamp)
    }

    /// Signed time elapsed since `earlier`. Negative when `earlier` is later.
    #[inline]
    pub fn duration_since(self, earlier: Self) -> Seconds {
        Seconds::new(self.seconds.wrapping_sub(earlier.seconds))
    }
}

impl<U: TimeUnit> Add<Duration<U>> for Datetime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration<U>) -> Self {
        Self::from_timestamp(self.seconds.wrapping_add(rhs.to_seconds()))
    }
}

impl<U: TimeUnit> Sub<Duration<U>> for Datetime {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration<U>) -> Self {
        Self::from_timestamp(self.seconds.wrapping_sub(rhs.to_seconds()))
    }
}

impl<U: TimeUnit> AddAssign<Duration<U>> for Datetime {
    #[inline]
    fn add_assign(&mut self, rhs: Duration<U>) {
        *self = *self + rhs;
    }
}

impl<U: TimeUnit> SubAssign<Duration<U>> for Datetime {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration<U>) {
        *self = *self - rhs;
    }
}

/// Computes the signed span between two instants.
impl Sub for Datetime {
    type Output = Seconds;

    #[inline]
    fn sub(self, rhs: Self) -> Seconds {
        self.duration_since(rhs)
    }
}

impl core::fmt::Display for Datetime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "@{}", self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{Days, Hours, Minutes, Months};
    extern crate std;
    use std::format;

    #[test]
    fn default_is_epoch() {
        assert_eq!(Datetime::default(), Datetime::EPOCH);
        assert_eq!(Datetime::EPOCH.timestamp(), 0);
    }

    #[test]
    fn add_and_sub_durations_of_any_unit() {
        let t = Datetime::from_timestamp(1_000);
        assert_eq!((t + Minutes::new(1)).timestamp(), 1_060);
        assert_eq!((t - Hours::new(1)).timestamp(), -2_600);
        assert_eq!((t + Months::new(1)).timestamp(), 1_000 + 2_592_000);

        let mut u = t;
        u += Days::new(2);
        u -= Days::new(1);
        assert_eq!(u.timestamp(), 1_000 + 86_400);
    }

    #[test]
    fn shift_round_trips() {
        let t = Datetime::from_timestamp(-12_345);
        let s = Minutes::new(77);
        assert_eq!((t + s) - s, t);
    }

    #[test]
    fn difference_is_signed_and_antisymmetric() {
        let a = Datetime::from_timestamp(100);
        let b = Datetime::from_timestamp(3_700);
        assert_eq!(b - a, Seconds::new(3_600));
        assert_eq!(a - b, Seconds::new(-3_600));
        assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn checked_ops_detect_overflow() {
        let late = Datetime::from_timestamp(i64::MAX);
        assert_eq!(late.checked_add(Seconds::new(1)), None);
        assert_eq!(Datetime::EPOCH.checked_add(Days::new(i64::MAX)), None);
        assert_eq!(
            Datetime::EPOCH.checked_sub(Minutes::new(1)),
            Some(Datetime::from_timestamp(-60))
        );
    }

    #[test]
    fn ordering_follows_timestamps() {
        let a = Datetime::from_timestamp(-1);
        let b = Datetime::from_timestamp(0);
        assert!(a < b);
        assert!(b > a);
        assert_ne!(a, b);
    }

    #[test]
    fn display_shows_timestamp() {
        assert_eq!(format!("{}", Datetime::from_timestamp(86_400)), "@86400");
    }
}
