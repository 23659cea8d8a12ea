//! Shared test infrastructure for breathing-led integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use breathing_led::{InputSource, PwmSink, TimeSource};

// ============================================================================
// Mock PWM
// ============================================================================

/// Mock PWM output that records all duty writes for testing
pub struct MockPwm {
    duty: u8,
    duty_history: heapless::Vec<u8, 64>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: 0xAA,
            duty_history: heapless::Vec::new(),
        }
    }

    pub fn last_duty(&self) -> u8 {
        self.duty
    }

    pub fn duty_history(&self) -> &[u8] {
        &self.duty_history
    }
}

impl PwmSink for MockPwm {
    fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
        let _ = self.duty_history.push(duty);
    }
}

// ============================================================================
// Mock Input
// ============================================================================

/// Mock button input whose level is set from the test body
pub struct MockInput<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockInput<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl InputSource for MockInput<'_> {
    fn read_level(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock microsecond time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    pub fn starting_at(time: u32) -> Self {
        Self {
            current_time: Cell::new(time),
        }
    }

    /// Advance time by the given number of microseconds, wrapping like hardware
    pub fn advance(&self, micros: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(micros));
    }
}

impl TimeSource<u32> for MockTimeSource {
    fn now(&self) -> u32 {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Step interval of the default 4 s / 256 step cycle
pub const STEP_US: u32 = 15_625;

/// Debounce delay used in debounce tests, in milliseconds
pub const DEBOUNCE_MS: u32 = 20;
