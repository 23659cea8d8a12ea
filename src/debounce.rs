//! Time-based debounce filter for a single digital input.

use crate::time::TimeInstant;

/// When the debouncer reports an accepted state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
    /// Report once, on the first poll where a new level has been stable for
    /// longer than the delay.
    #[default]
    EdgeTriggered,

    /// Report on every poll where the input has been stable for longer than
    /// the delay, whether or not the level changed.
    Repeating,
}

/// Debounces a noisy digital input.
///
/// Any change of the raw level restarts the debounce window. A level is
/// accepted once it has been held for strictly longer than the delay.
///
/// # Type Parameters
/// * `I` - Time instant type; the delay is in the same unit
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<I: TimeInstant> {
    last_raw: bool,
    last_change: I,
    settled: bool,
    confirmed: bool,
    delay: I::Duration,
    policy: DebouncePolicy,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer with the input assumed low since `now`.
    pub fn new(delay: I::Duration, now: I) -> Self {
        Self::with_initial_level(false, delay, now)
    }

    /// Creates a debouncer seeded with a known input level.
    ///
    /// Use this with a pin reading taken at startup so an input that is
    /// already at rest does not register as a transition.
    pub fn with_initial_level(level: bool, delay: I::Duration, now: I) -> Self {
        Self {
            last_raw: level,
            last_change: now,
            settled: false,
            confirmed: level,
            delay,
            policy: DebouncePolicy::EdgeTriggered,
        }
    }

    /// Sets the acceptance policy.
    pub fn with_policy(mut self, policy: DebouncePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Feeds one raw sample into the filter.
    ///
    /// # Arguments
    /// * `raw_level` - Current pin level
    /// * `now` - Current time
    ///
    /// # Returns
    /// `true` if this sample completes an accepted state change (see
    /// [`DebouncePolicy`]), `false` otherwise
    pub fn update(&mut self, raw_level: bool, now: I) -> bool {
        if raw_level != self.last_raw {
            self.last_change = now;
            self.settled = false;
        }
        self.last_raw = raw_level;

        // Once settled, the elapsed time is no longer needed and may alias
        // after a counter wrap
        if !self.settled {
            if now.duration_since(self.last_change) <= self.delay {
                return false;
            }
            self.settled = true;
        }

        match self.policy {
            DebouncePolicy::Repeating => {
                self.confirmed = raw_level;
                true
            }
            DebouncePolicy::EdgeTriggered => {
                if self.confirmed == raw_level {
                    return false;
                }
                self.confirmed = raw_level;
                true
            }
        }
    }

    /// Returns the last accepted level.
    pub fn level(&self) -> bool {
        self.confirmed
    }

    /// Returns the most recent raw sample.
    pub fn raw_level(&self) -> bool {
        self.last_raw
    }

    /// Returns the debounce delay.
    pub fn delay(&self) -> I::Duration {
        self.delay
    }

    /// Returns the acceptance policy.
    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }
}
