#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Duration<U>`**: A signed count of unit `U` (`Seconds`, `Minutes`, ... `Years`)
//! - **`TimeUnit`**: Marker trait carrying a unit's seconds-per-unit factor
//! - **`Datetime`**: An instant as seconds since the Unix epoch
//! - **`Period`**: Two instants bounding an interval
//! - **`Accessor`**: A period paired with a step, from `Period::every`
//! - **`StepCursor`**: Explicit position (`current`/`advance`/`at_end`) within an accessor
//! - **`Steps`**: Standard iterator over an accessor's instants
//! - **`TimeSource`**: Trait to implement for your clock
//!
//! All arithmetic is flat integer seconds. Months are 30 days and years are
//! 365 days.

pub mod constants;
pub mod time;
pub mod duration;
pub mod datetime;
pub mod period;
pub mod accessor;
pub mod types;

pub use accessor::{Accessor, StepCursor, Steps};
pub use datetime::Datetime;
pub use duration::{Days, Duration, Hours, Minutes, Months, Seconds, Weeks, Years};
pub use period::Period;
pub use time::{Day, Hour, Minute, Month, Second, TimeSource, TimeUnit, Week, Year};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use types::PeriodError;
