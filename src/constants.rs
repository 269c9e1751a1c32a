//! Unit conversion factors, in seconds.
//!
//! Months and years are fixed-length approximations (30 and 365 days). No
//! calendar or leap-year rules apply anywhere in this crate.

pub const SECONDS_IN_MINUTE: u64 = 60;
pub const SECONDS_IN_HOUR: u64 = SECONDS_IN_MINUTE * 60;
pub const SECONDS_IN_DAY: u64 = SECONDS_IN_HOUR * 24;
pub const SECONDS_IN_WEEK: u64 = SECONDS_IN_DAY * 7;
/// 30-day month.
pub const SECONDS_IN_MONTH: u64 = SECONDS_IN_DAY * 30;
/// 365-day year.
pub const SECONDS_IN_YEAR: u64 = SECONDS_IN_DAY * 365;
