#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use breathing_led::{
    BreathingConfig, BreathingLight, DEBOUNCE_DELAY_US, InputSource, PwmSink, TimeSource,
};

// ============================================================================
// Minimal Hardware
// ============================================================================

/// Zero-size PWM output for measuring library overhead
pub struct MinimalPwm;

impl PwmSink for MinimalPwm {
    fn set_duty(&mut self, duty: u8) {
        core::hint::black_box(duty);
    }
}

/// Zero-size button input, reads an opaque level
pub struct MinimalInput;

impl InputSource for MinimalInput {
    fn read_level(&mut self) -> bool {
        core::hint::black_box(true)
    }
}

/// Time source backed by an opaque 32-bit microsecond counter
pub struct MinimalTimeSource;

impl TimeSource<u32> for MinimalTimeSource {
    fn now(&self) -> u32 {
        core::hint::black_box(0)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

#[entry]
fn main() -> ! {
    let time_source = MinimalTimeSource;

    let Ok(mut light) = BreathingLight::new(
        MinimalPwm,
        MinimalInput,
        &BreathingConfig::DEFAULT,
        DEBOUNCE_DELAY_US,
        false,
        time_source.now(),
    ) else {
        loop {
            cortex_m::asm::wfi();
        }
    };

    loop {
        core::hint::black_box(light.service(&time_source));
    }
}
