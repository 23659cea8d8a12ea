//! Time abstraction traits for platform-agnostic timing.
//!
//! Timestamps are monotonic tick counters that are allowed to wrap at their
//! native width. All elapsed-time arithmetic goes through
//! [`TimeInstant::duration_since`], which must be wraparound-safe.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds, returns None if it does not fit.
    fn from_micros(micros: u64) -> Option<Self>;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Must stay correct across a counter wraparound, i.e. behave like
    /// `wrapping_sub` at the counter's native width.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, wrapping at the counter's native width.
    fn wrapping_add(self, duration: Self::Duration) -> Self;
}

/// Implements the time traits for a raw microsecond tick counter.
macro_rules! impl_tick_counter {
    ($($ty:ty),*) => {
        $(
            impl TimeDuration for $ty {
                #[inline]
                fn as_micros(&self) -> u64 {
                    u64::from(*self)
                }

                #[inline]
                fn from_micros(micros: u64) -> Option<Self> {
                    <$ty>::try_from(micros).ok()
                }
            }

            impl TimeInstant for $ty {
                type Duration = $ty;

                #[inline]
                fn duration_since(&self, earlier: Self) -> Self::Duration {
                    self.wrapping_sub(earlier)
                }

                #[inline]
                fn wrapping_add(self, duration: Self::Duration) -> Self {
                    <$ty>::wrapping_add(self, duration)
                }
            }
        )*
    };
}

impl_tick_counter!(u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_survives_u32_wraparound() {
        let earlier: u32 = u32::MAX - 9;
        let now: u32 = 5;
        assert_eq!(now.duration_since(earlier), 15);
    }

    #[test]
    fn duration_since_survives_u16_wraparound() {
        let earlier: u16 = 65_000;
        let now = earlier.wrapping_add(15_625u16);
        assert_eq!(now.duration_since(earlier), 15_625);
    }

    #[test]
    fn from_micros_rejects_values_wider_than_counter() {
        assert_eq!(<u16 as TimeDuration>::from_micros(15_625), Some(15_625));
        assert_eq!(<u16 as TimeDuration>::from_micros(70_000), None);
        assert_eq!(<u32 as TimeDuration>::from_micros(70_000), Some(70_000));
    }

    #[test]
    fn wrapping_add_wraps_at_native_width() {
        let instant: u16 = u16::MAX;
        assert_eq!(TimeInstant::wrapping_add(instant, 2u16), 1);
    }
}
