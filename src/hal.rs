//! Adapters from `embedded-hal` 1.0 traits to the capability traits.

use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::light::{InputSource, PwmSink};

/// [`PwmSink`] backed by an `embedded-hal` PWM channel.
///
/// Scales the 8-bit duty onto the channel's full range. Channel errors are
/// discarded.
pub struct PwmChannel<P: SetDutyCycle> {
    channel: P,
    inverted: bool,
}

impl<P: SetDutyCycle> PwmChannel<P> {
    /// Wraps a PWM channel where a higher duty means a brighter LED.
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            inverted: false,
        }
    }

    /// Wraps a PWM channel driving an active-low (common anode) LED.
    pub fn inverted(channel: P) -> Self {
        Self {
            channel,
            inverted: true,
        }
    }

    /// Returns the wrapped channel.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> PwmSink for PwmChannel<P> {
    fn set_duty(&mut self, duty: u8) {
        let duty = if self.inverted { u8::MAX - duty } else { duty };
        let _ = self
            .channel
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX));
    }
}

/// [`InputSource`] backed by an `embedded-hal` input pin.
///
/// If a read fails, the last successfully read level is reported.
pub struct InputLine<P: InputPin> {
    pin: P,
    last_level: bool,
}

impl<P: InputPin> InputLine<P> {
    /// Wraps an input pin.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_level: false,
        }
    }

    /// Returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> InputSource for InputLine<P> {
    fn read_level(&mut self) -> bool {
        if let Ok(level) = self.pin.is_high() {
            self.last_level = level;
        }
        self.last_level
    }
}
