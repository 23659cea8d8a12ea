#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`waveform::compute`**: Maps an 8-bit phase and peak intensity to an 8-bit LED intensity
//! - **`BreathingScheduler`**: Advances the phase on a fixed step interval and yields the intensity
//! - **`Debouncer`**: Turns a noisy pin level into clean, accepted transitions
//! - **`BreathingLight`**: Runs one control loop iteration: button, scheduler, PWM write
//! - **`BreathingConfig`**: Cycle duration, step count, peak intensity and advance policy
//! - **`PwmSink`** / **`InputSource`**: Traits to implement for your PWM output and button pin
//! - **`TimeInstant`** / **`TimeSource`**: Traits for your microsecond time base
//!
//! No component reads a clock on its own. Every update receives the current
//! timestamp, so behavior is fully deterministic under test.

pub mod time;
pub mod config;
pub mod waveform;
pub mod scheduler;
pub mod debounce;
pub mod light;
pub mod hal;

pub use config::{
    AdvancePolicy, BreathingConfig, ConfigError, BREATHING_CYCLE_MS, BREATHING_STEPS,
    BREATHING_STEP_US, DEBOUNCE_DELAY_US, MAX_INTENSITY,
};
pub use debounce::{DebouncePolicy, Debouncer};
pub use hal::{InputLine, PwmChannel};
pub use light::{BreathingLight, InputSource, LightMode, PwmSink};
pub use scheduler::{BreathingScheduler, cycle_position};
pub use time::{TimeDuration, TimeInstant, TimeSource};
