//! Unit-typed durations.
//!
//! A [`Duration<U>`] is a signed count of `U`. The unit is part of the type,
//! so `Minutes + Hours` does not compile; normalize through
//! [`Duration::convert`] first.

use crate::time::{Day, Hour, Minute, Month, Second, TimeUnit, Week, Year};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// `U::SECONDS` as a signed factor. Fails to compile for a unit outside
/// `1..=i64::MAX`.
const fn seconds_per_unit<U: TimeUnit>() -> i64 {
    const {
        assert!(
            U::SECONDS >= 1 && U::SECONDS <= i64::MAX as u64,
            "TimeUnit::SECONDS must be in 1..=i64::MAX"
        );
    }
    U::SECONDS as i64
}

/// A signed count of time units.
///
/// Arithmetic operators wrap on overflow. Use the `checked_*` methods to
/// detect it.
///
/// # Type Parameters
/// * `U` - The unit marker (e.g., [`Minute`]), fixing seconds-per-unit
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration<U: TimeUnit> {
    count: i64,
    unit: PhantomData<U>,
}

pub type Seconds = Duration<Second>;
pub type Minutes = Duration<Minute>;
pub type Hours = Duration<Hour>;
pub type Days = Duration<Day>;
pub type Weeks = Duration<Week>;
/// 30-day months.
pub type Months = Duration<Month>;
/// 365-day years.
pub type Years = Duration<Year>;

impl<U: TimeUnit> Duration<U> {
    /// Zero duration constant.
    pub const ZERO: Self = Self::new(0);

    /// Creates a duration of `count` units.
    #[inline]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    /// Creates a duration from seconds, truncating toward zero.
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds / seconds_per_unit::<U>())
    }

    /// Returns the number of units.
    #[inline]
    pub const fn count(self) -> i64 {
        self.count
    }

    /// Converts to seconds. Wraps silently on overflow.
    #[inline]
    pub const fn to_seconds(self) -> i64 {
        self.count.wrapping_mul(seconds_per_unit::<U>())
    }

    /// Converts to seconds, returns None on overflow.
    #[inline]
    pub const fn checked_to_seconds(self) -> Option<i64> {
        self.count.checked_mul(seconds_per_unit::<U>())
    }

    /// Re-expresses this duration in unit `V`, going through seconds.
    ///
    /// Converting to a coarser unit truncates toward zero:
    /// `Minutes::new(90).convert::<Hour>()` is one hour.
    #[inline]
    pub const fn convert<V: TimeUnit>(self) -> Duration<V> {
        Duration::from_seconds(self.to_seconds())
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.count < 0
    }

    /// Absolute value. `i64::MIN` units wraps to itself.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.count.wrapping_abs())
    }

    /// Adds two durations, returns None on overflow.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.count.checked_add(other.count).map(Self::new)
    }

    /// Subtracts two durations, returns None on overflow.
    #[inline]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.count.checked_sub(other.count).map(Self::new)
    }

    /// Saturating subtraction (clamps at the `i64` bounds).
    #[inline]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self::new(self.count.saturating_sub(other.count))
    }
}

impl<U: TimeUnit> Default for Duration<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: TimeUnit> Add for Duration<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.count.wrapping_add(rhs.count))
    }
}

impl<U: TimeUnit> Sub for Duration<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.count.wrapping_sub(rhs.count))
    }
}

impl<U: TimeUnit> AddAssign for Duration<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U: TimeUnit> SubAssign for Duration<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U: TimeUnit> Neg for Duration<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.count.wrapping_neg())
    }
}

impl<U: TimeUnit> Mul<i64> for Duration<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.count.wrapping_mul(rhs))
    }
}

impl<U: TimeUnit> core::fmt::Debug for Duration<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Duration({}{})", self.count, U::SUFFIX)
    }
}

impl<U: TimeUnit> core::fmt::Display for Duration<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.count, U::SUFFIX)
    }
}

#[cfg(feature = "defmt")]
impl<U: TimeUnit> defmt::Format for Duration<U> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}{=str}", self.count, U::SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn to_seconds_multiplies_by_unit_factor() {
        assert_eq!(Seconds::new(42).to_seconds(), 42);
        assert_eq!(Minutes::new(15).to_seconds(), 900);
        assert_eq!(Hours::new(2).to_seconds(), 7_200);
        assert_eq!(Days::new(1).to_seconds(), 86_400);
        assert_eq!(Weeks::new(1).to_seconds(), 604_800);
        assert_eq!(Months::new(1).to_seconds(), 2_592_000);
        assert_eq!(Years::new(1).to_seconds(), 31_536_000);
    }

    #[test]
    fn to_seconds_wraps_on_overflow() {
        let huge = Years::new(i64::MAX);
        assert_eq!(huge.to_seconds(), i64::MAX.wrapping_mul(31_536_000));
        assert_eq!(huge.checked_to_seconds(), None);
    }

    #[test]
    fn convert_goes_through_seconds() {
        assert_eq!(Hours::new(1).convert::<Minute>(), Minutes::new(60));
        assert_eq!(Minutes::new(90).convert::<Hour>(), Hours::new(1));
        assert_eq!(Minutes::new(-90).convert::<Hour>(), Hours::new(-1));
        assert_eq!(Days::new(1).convert::<Second>(), Seconds::new(86_400));
    }

    #[test]
    fn same_unit_arithmetic() {
        let mut d = Minutes::new(10) + Minutes::new(5);
        assert_eq!(d, Minutes::new(15));
        d -= Minutes::new(20);
        assert_eq!(d, Minutes::new(-5));
        assert!(d.is_negative());
        assert_eq!(d.abs(), Minutes::new(5));
        assert_eq!(-d, Minutes::new(5));
        assert_eq!(Minutes::new(3) * 4, Minutes::new(12));
        assert!(Minutes::new(1) < Minutes::new(2));
    }

    #[test]
    fn checked_and_saturating_ops() {
        assert_eq!(Seconds::new(i64::MAX).checked_add(Seconds::new(1)), None);
        assert_eq!(
            Seconds::new(1).checked_sub(Seconds::new(3)),
            Some(Seconds::new(-2))
        );
        assert_eq!(
            Seconds::new(i64::MIN).saturating_sub(Seconds::new(1)),
            Seconds::new(i64::MIN)
        );
    }

    #[test]
    fn custom_unit_at_largest_factor() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        struct Aeon;

        impl TimeUnit for Aeon {
            const SECONDS: u64 = i64::MAX as u64;
            const SUFFIX: &'static str = "ae";
        }

        let one = Duration::<Aeon>::new(1);
        assert_eq!(one.to_seconds(), i64::MAX);
        assert_eq!(one.convert::<Second>(), Seconds::new(i64::MAX));
        assert_eq!(Seconds::new(i64::MAX - 1).convert::<Aeon>(), Duration::<Aeon>::ZERO);
        assert_eq!(Duration::<Aeon>::new(2).checked_to_seconds(), None);
    }

    #[test]
    fn zero_and_default() {
        assert!(Hours::ZERO.is_zero());
        assert_eq!(Hours::default(), Hours::ZERO);
    }

    #[test]
    fn display_uses_unit_suffix() {
        assert_eq!(format!("{}", Minutes::new(15)), "15m");
        assert_eq!(format!("{}", Seconds::new(-3)), "-3s");
        assert_eq!(format!("{:?}", Months::new(2)), "Duration(2mo)");
    }
}
