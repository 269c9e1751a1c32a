//! Time unit and time source abstractions.

use crate::constants::{
    SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE, SECONDS_IN_MONTH, SECONDS_IN_WEEK,
    SECONDS_IN_YEAR,
};
use crate::datetime::Datetime;

/// Trait for unit markers that parameterize [`Duration`](crate::Duration).
///
/// Units are zero-sized markers carrying their conversion factor, so that
/// durations of different units are distinct types.
pub trait TimeUnit: Copy + Eq + Ord + core::fmt::Debug {
    /// Seconds per unit. Must be in `1..=i64::MAX`.
    ///
    /// Any other value is rejected at compile time once a duration of the
    /// unit is used:
    ///
    /// ```compile_fail
    /// use asap::{Duration, TimeUnit};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    /// struct Instant;
    ///
    /// impl TimeUnit for Instant {
    ///     const SECONDS: u64 = 0;
    ///     const SUFFIX: &'static str = "i";
    /// }
    ///
    /// let _ = Duration::<Instant>::new(5).to_seconds();
    /// ```
    const SECONDS: u64;

    /// Suffix used by `Display`, e.g. `"m"` for minutes.
    const SUFFIX: &'static str;
}

macro_rules! time_unit {
    ($(#[$meta:meta])* $name:ident, $seconds:expr, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name;

        impl TimeUnit for $name {
            const SECONDS: u64 = $seconds;
            const SUFFIX: &'static str = $suffix;
        }
    };
}

time_unit!(
    /// One second.
    Second, 1, "s"
);
time_unit!(
    /// Sixty seconds.
    Minute, SECONDS_IN_MINUTE, "m"
);
time_unit!(Hour, SECONDS_IN_HOUR, "h");
time_unit!(Day, SECONDS_IN_DAY, "d");
time_unit!(Week, SECONDS_IN_WEEK, "w");
time_unit!(
    /// A 30-day month.
    Month, SECONDS_IN_MONTH, "mo"
);
time_unit!(
    /// A 365-day year.
    Year, SECONDS_IN_YEAR, "y"
);

/// Trait for abstracting time sources.
///
/// The library never reads a clock itself; implement this for whatever
/// provides wall-clock time on your platform.
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> Datetime;
}

/// Time source backed by the host system clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Datetime {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Clocks set before 1970 yield a negative timestamp.
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_secs()).map_or(i64::MIN, |s| -s),
        };
        Datetime::from_timestamp(secs)
    }
}
