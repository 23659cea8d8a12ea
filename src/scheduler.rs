//! Breathing scheduler with fixed-interval phase stepping.
//!
//! Provides [`BreathingScheduler`], which advances the waveform phase at a fixed
//! step interval no matter how often it is polled, and [`cycle_position`] for
//! mapping elapsed time onto a position in the cycle.

use crate::config::{AdvancePolicy, BreathingConfig, ConfigError};
use crate::time::{TimeDuration, TimeInstant};
use crate::waveform;

/// Advances the breathing phase on a fixed time grid.
///
/// The scheduler never reads a clock itself; every call to [`advance`](Self::advance)
/// receives the current timestamp. Poll it at the step rate or faster.
///
/// # Type Parameters
/// * `I` - Time instant type, counting microseconds
#[derive(Debug, Clone, Copy)]
pub struct BreathingScheduler<I: TimeInstant> {
    last_step: I,
    phase: u8,
    stride: u8,
    step_interval: I::Duration,
    max_intensity: u8,
    policy: AdvancePolicy,
}

impl<I: TimeInstant> BreathingScheduler<I> {
    /// Creates a scheduler at phase 0 with `baseline` as the last step time.
    ///
    /// # Errors
    /// Any [`ConfigError`] from validation, or `IntervalOutOfRange` when the
    /// step interval does not fit `I::Duration`.
    pub fn new(config: &BreathingConfig, baseline: I) -> Result<Self, ConfigError> {
        let interval_us = config.step_interval_us()?;
        let step_interval = I::Duration::from_micros(interval_us)
            .ok_or(ConfigError::IntervalOutOfRange { interval_us })?;

        Ok(Self {
            last_step: baseline,
            phase: 0,
            stride: config.phase_stride()?,
            step_interval,
            max_intensity: config.max_intensity,
            policy: config.policy,
        })
    }

    /// Advances the phase if a step interval has elapsed and returns the
    /// current intensity.
    ///
    /// With [`AdvancePolicy::SingleStep`] at most one step is taken per call and
    /// the step grid restarts at `now`. With [`AdvancePolicy::CatchUp`] every
    /// whole elapsed interval is applied and the remainder carries over.
    ///
    /// The intensity is returned on every call, whether or not the phase moved.
    pub fn advance(&mut self, now: I) -> u8 {
        let elapsed = now.duration_since(self.last_step);

        if elapsed >= self.step_interval {
            match self.policy {
                AdvancePolicy::SingleStep => {
                    self.phase = self.phase.wrapping_add(self.stride);
                    self.last_step = now;
                }
                AdvancePolicy::CatchUp => self.catch_up(elapsed),
            }
        }

        self.intensity()
    }

    fn catch_up(&mut self, elapsed: I::Duration) {
        let interval_us = self.step_interval.as_micros();
        let steps = elapsed.as_micros() / interval_us;

        // The phase is 8 bits wide, so only the step count mod 256 matters
        let delta = ((steps % 256) as u8).wrapping_mul(self.stride);
        self.phase = self.phase.wrapping_add(delta);

        // steps * interval <= elapsed, so it always fits the duration type
        let consumed = I::Duration::from_micros(steps * interval_us).unwrap_or(elapsed);
        self.last_step = self.last_step.wrapping_add(consumed);
    }

    /// Restarts the cycle at phase 0 with `baseline` as the last step time.
    pub fn reset(&mut self, baseline: I) {
        self.phase = 0;
        self.last_step = baseline;
    }

    /// Returns the intensity for the current phase.
    #[inline]
    pub fn intensity(&self) -> u8 {
        waveform::compute(self.max_intensity, self.phase)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Returns the phase increment applied per step.
    pub fn stride(&self) -> u8 {
        self.stride
    }

    /// Returns the time between two steps.
    pub fn step_interval(&self) -> I::Duration {
        self.step_interval
    }

    /// Returns the peak intensity.
    pub fn max_intensity(&self) -> u8 {
        self.max_intensity
    }

    /// Returns the advance policy.
    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }
}

/// Maps elapsed time onto a position within the cycle, in [0, 255).
///
/// Periodic in `cycle_us`: `cycle_position(t, c) == cycle_position(t + c, c)`.
/// Returns 0 for a zero-length cycle.
pub fn cycle_position(elapsed_us: u64, cycle_us: u64) -> u8 {
    if cycle_us == 0 {
        return 0;
    }

    let in_cycle = u128::from(elapsed_us % cycle_us);
    (in_cycle * 255 / u128::from(cycle_us)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_phase_zero_and_dark() {
        let scheduler = BreathingScheduler::new(&BreathingConfig::DEFAULT, 0u32).unwrap();
        assert_eq!(scheduler.phase(), 0);
        assert_eq!(scheduler.intensity(), 0);
        assert_eq!(scheduler.step_interval(), 15_625);
    }

    #[test]
    fn rejects_interval_wider_than_counter() {
        // 60 s / 2 steps = 30 s, which overflows a 16-bit microsecond counter
        let config = BreathingConfig::new(60_000, 2);
        let result = BreathingScheduler::new(&config, 0u16);
        assert_eq!(
            result.err(),
            Some(ConfigError::IntervalOutOfRange {
                interval_us: 30_000_000
            })
        );
    }

    #[test]
    fn reset_returns_to_phase_zero() {
        let mut scheduler = BreathingScheduler::new(&BreathingConfig::DEFAULT, 0u32).unwrap();
        scheduler.advance(15_625);
        scheduler.advance(31_250);
        assert_eq!(scheduler.phase(), 2);

        scheduler.reset(40_000);
        assert_eq!(scheduler.phase(), 0);

        // Next step is measured from the new baseline
        scheduler.advance(40_000 + 15_624);
        assert_eq!(scheduler.phase(), 0);
        scheduler.advance(40_000 + 15_625);
        assert_eq!(scheduler.phase(), 1);
    }

    #[test]
    fn cycle_position_handles_zero_cycle() {
        assert_eq!(cycle_position(1234, 0), 0);
    }
}
