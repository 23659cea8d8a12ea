//! Breathing LED control loop with a debounced toggle button.
//!
//! Provides [`BreathingLight`], which ties a [`BreathingScheduler`] and a
//! [`Debouncer`] to the hardware through the [`PwmSink`] and [`InputSource`]
//! capability traits.

use crate::config::{BreathingConfig, ConfigError};
use crate::debounce::{DebouncePolicy, Debouncer};
use crate::scheduler::BreathingScheduler;
use crate::time::{TimeInstant, TimeSource};

/// Trait for abstracting the PWM output driving the LED.
///
/// Implement this for your PWM hardware. Handle any hardware errors
/// internally - this method cannot fail.
pub trait PwmSink {
    /// Writes an 8-bit duty cycle, 0 is off and 255 is fully on.
    fn set_duty(&mut self, duty: u8);
}

/// Trait for abstracting the digital input read by the toggle button.
pub trait InputSource {
    /// Returns the raw pin level, `true` for high.
    fn read_level(&mut self) -> bool;
}

impl<T: PwmSink + ?Sized> PwmSink for &mut T {
    fn set_duty(&mut self, duty: u8) {
        (**self).set_duty(duty);
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_level(&mut self) -> bool {
        (**self).read_level()
    }
}

/// Output mode of a [`BreathingLight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    /// LED follows the breathing waveform.
    Breathing,
    /// LED is held dark. The cycle keeps running in the background.
    Off,
}

impl LightMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            LightMode::Breathing => LightMode::Off,
            LightMode::Off => LightMode::Breathing,
        }
    }
}

/// Drives one breathing LED and one toggle button.
///
/// Each [`poll`](Self::poll) samples the button, feeds the debouncer, advances
/// the scheduler and writes the resulting duty cycle. A debounced transition to
/// the button's active level toggles between [`LightMode::Breathing`] and
/// [`LightMode::Off`].
///
/// # Type Parameters
/// * `I` - Time instant type, counting microseconds
/// * `P` - PWM output implementation type
/// * `S` - Button input implementation type
pub struct BreathingLight<I: TimeInstant, P: PwmSink, S: InputSource> {
    pwm: P,
    input: S,
    scheduler: BreathingScheduler<I>,
    debouncer: Debouncer<I>,
    active_level: bool,
    mode: LightMode,
}

impl<I: TimeInstant, P: PwmSink, S: InputSource> BreathingLight<I, P, S> {
    /// Creates a breathing light in [`LightMode::Breathing`].
    ///
    /// The PWM output is cleared at startup; breathing starts on the first
    /// [`poll`](Self::poll). The button debouncer is always
    /// [`DebouncePolicy::EdgeTriggered`], so one press toggles once. It is seeded
    /// with the current pin level, so a button that is not pressed at startup
    /// does not toggle the light.
    ///
    /// # Arguments
    /// * `pwm` - PWM output for the LED
    /// * `input` - Button input
    /// * `config` - Breathing cycle configuration
    /// * `debounce_delay` - Time the button level must be held before it is accepted
    /// * `active_level` - Pin level while the button is pressed (`false` for active-low)
    /// * `now` - Startup timestamp, used as the scheduler baseline
    ///
    /// # Errors
    /// Returns the [`ConfigError`] if the configuration is invalid. The LED is
    /// not touched in that case.
    pub fn new(
        mut pwm: P,
        mut input: S,
        config: &BreathingConfig,
        debounce_delay: I::Duration,
        active_level: bool,
        now: I,
    ) -> Result<Self, ConfigError> {
        let scheduler = BreathingScheduler::new(config, now)?;
        let debouncer = Debouncer::with_initial_level(input.read_level(), debounce_delay, now)
            .with_policy(DebouncePolicy::EdgeTriggered);

        pwm.set_duty(0);

        Ok(Self {
            pwm,
            input,
            scheduler,
            debouncer,
            active_level,
            mode: LightMode::Breathing,
        })
    }

    /// Runs one control loop iteration at `now` and returns the duty written.
    pub fn poll(&mut self, now: I) -> u8 {
        let level = self.input.read_level();
        if self.debouncer.update(level, now) && self.debouncer.level() == self.active_level {
            self.toggle();
        }

        let intensity = self.scheduler.advance(now);
        let duty = match self.mode {
            LightMode::Breathing => intensity,
            LightMode::Off => 0,
        };

        self.pwm.set_duty(duty);
        duty
    }

    /// Runs one control loop iteration using the time source's current time.
    pub fn service<T: TimeSource<I>>(&mut self, time_source: &T) -> u8 {
        self.poll(time_source.now())
    }

    /// Switches between breathing and off.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Sets the output mode. Takes effect on the next poll.
    pub fn set_mode(&mut self, mode: LightMode) {
        #[cfg(feature = "defmt")]
        defmt::debug!("breathing light: {} -> {}", self.mode, mode);

        self.mode = mode;
    }

    /// Returns the current output mode.
    pub fn mode(&self) -> LightMode {
        self.mode
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &BreathingScheduler<I> {
        &self.scheduler
    }

    /// Returns the button debouncer.
    pub fn debouncer(&self) -> &Debouncer<I> {
        &self.debouncer
    }

    /// Consumes the light and returns the PWM output and button input.
    pub fn release(self) -> (P, S) {
        (self.pwm, self.input)
    }
}
