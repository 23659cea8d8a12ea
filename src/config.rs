//! Compile-time constants and validated breathing configuration.

/// Duration of one full breathing cycle in milliseconds.
pub const BREATHING_CYCLE_MS: u32 = 4000;

/// Number of phase steps per breathing cycle.
pub const BREATHING_STEPS: u16 = 256;

/// Time between two phase steps in microseconds.
pub const BREATHING_STEP_US: u32 = BREATHING_CYCLE_MS * 1000 / BREATHING_STEPS as u32;

/// Debounce delay for the toggle button in microseconds.
pub const DEBOUNCE_DELAY_US: u32 = 20_000;

/// Peak LED intensity.
pub const MAX_INTENSITY: u8 = 255;

/// Number of distinct phase values in one cycle.
pub const PHASE_RANGE: u16 = 256;

const _: () = assert!(
    BREATHING_STEP_US as u64 * BREATHING_STEPS as u64 == BREATHING_CYCLE_MS as u64 * 1000,
    "breathing cycle must divide evenly into steps"
);

/// How the scheduler reacts when more than one step interval has elapsed
/// between two polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvancePolicy {
    /// Advance at most one step per poll. A starved poll loop slows the
    /// animation down instead of skipping ahead.
    #[default]
    SingleStep,

    /// Advance by every whole step interval that has elapsed.
    CatchUp,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cycle duration is zero.
    ZeroCycle,

    /// Step count is not a divisor of 256 in the range 2..=256.
    InvalidStepCount {
        /// The rejected step count.
        steps: u16,
    },

    /// Cycle duration does not divide evenly into steps.
    InexactStepInterval {
        /// Configured cycle duration in milliseconds.
        cycle_ms: u32,
        /// Configured step count.
        steps: u16,
    },

    /// Step interval does not fit the timestamp type.
    IntervalOutOfRange {
        /// Required step interval in microseconds.
        interval_us: u64,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCycle => {
                write!(f, "breathing cycle duration must be non-zero")
            }
            ConfigError::InvalidStepCount { steps } => {
                write!(
                    f,
                    "step count {} must divide {} and be at least 2",
                    steps, PHASE_RANGE
                )
            }
            ConfigError::InexactStepInterval { cycle_ms, steps } => {
                write!(
                    f,
                    "cycle of {} ms does not divide evenly into {} steps",
                    cycle_ms, steps
                )
            }
            ConfigError::IntervalOutOfRange { interval_us } => {
                write!(
                    f,
                    "step interval of {} us does not fit the timestamp type",
                    interval_us
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Breathing cycle configuration.
///
/// Built from compile-time constants and checked once with [`validate`](Self::validate)
/// before the scheduler starts. There is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathingConfig {
    /// Duration of one full cycle in milliseconds.
    pub cycle_ms: u32,

    /// Number of phase steps per cycle.
    pub steps: u16,

    /// Peak intensity reached at the middle of the cycle.
    pub max_intensity: u8,

    /// Behavior when the poll loop falls behind.
    pub policy: AdvancePolicy,
}

impl BreathingConfig {
    /// 4 second cycle over 256 steps at full intensity.
    pub const DEFAULT: Self = Self::new(BREATHING_CYCLE_MS, BREATHING_STEPS);

    /// Creates a configuration with full intensity and single-step advance.
    pub const fn new(cycle_ms: u32, steps: u16) -> Self {
        Self {
            cycle_ms,
            steps,
            max_intensity: MAX_INTENSITY,
            policy: AdvancePolicy::SingleStep,
        }
    }

    /// Sets the peak intensity.
    pub const fn with_max_intensity(mut self, max_intensity: u8) -> Self {
        self.max_intensity = max_intensity;
        self
    }

    /// Sets the advance policy.
    pub const fn with_policy(mut self, policy: AdvancePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cycle duration in microseconds.
    #[inline]
    pub const fn cycle_us(&self) -> u64 {
        self.cycle_ms as u64 * 1000
    }

    /// Checks that the configuration describes an exact, complete cycle.
    ///
    /// # Errors
    /// * `ZeroCycle` - Cycle duration is zero
    /// * `InvalidStepCount` - Steps do not evenly cover the 8-bit phase range
    /// * `InexactStepInterval` - Cycle duration is not a multiple of the step count
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_ms == 0 {
            return Err(ConfigError::ZeroCycle);
        }

        if self.steps < 2 || self.steps > PHASE_RANGE || PHASE_RANGE % self.steps != 0 {
            return Err(ConfigError::InvalidStepCount { steps: self.steps });
        }

        if self.cycle_us() % u64::from(self.steps) != 0 {
            return Err(ConfigError::InexactStepInterval {
                cycle_ms: self.cycle_ms,
                steps: self.steps,
            });
        }

        Ok(())
    }

    /// Returns the validated step interval in microseconds.
    pub fn step_interval_us(&self) -> Result<u64, ConfigError> {
        self.validate()?;
        Ok(self.cycle_us() / u64::from(self.steps))
    }

    /// Returns the phase increment applied on every step.
    pub fn phase_stride(&self) -> Result<u8, ConfigError> {
        self.validate()?;
        // steps >= 2, so the stride is at most 128
        Ok((PHASE_RANGE / self.steps) as u8)
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
