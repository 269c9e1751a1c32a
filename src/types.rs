//! Error types.

/// Errors from the fallible period operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeriodError {
    /// More values than the output buffer can hold.
    CapacityExceeded {
        /// Capacity of the buffer that overflowed.
        capacity: usize,
    },

    /// A bound fell outside the representable timestamp range.
    Overflow,
}

impl core::fmt::Display for PeriodError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PeriodError::CapacityExceeded { capacity } => {
                write!(f, "period yields more than {} values", capacity)
            }
            PeriodError::Overflow => {
                write!(f, "period bound overflows the timestamp range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PeriodError {}
