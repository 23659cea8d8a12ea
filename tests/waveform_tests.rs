//! Integration tests for the breathing waveform

use breathing_led::waveform::compute;

#[test]
fn never_exceeds_max_value() {
    for max_value in 0..=255u8 {
        for phase in 0..=255u8 {
            assert!(
                compute(max_value, phase) <= max_value,
                "compute({}, {}) exceeded max",
                max_value,
                phase
            );
        }
    }
}

#[test]
fn dark_at_cycle_endpoints() {
    for max_value in 0..=255u8 {
        assert_eq!(compute(max_value, 0), 0);
        assert_eq!(compute(max_value, 255), 0);
    }
}

#[test]
fn near_full_brightness_at_midpoint() {
    assert!(compute(255, 127) > 240);
}

#[test]
fn quarter_points_are_substantially_lit() {
    assert!(compute(255, 64) > 100);
    assert!(compute(255, 191) > 100);
}

#[test]
fn scaled_peak_stays_within_max() {
    let result = compute(100, 127);
    assert!(result > 90);
    assert!(result <= 100);
}

#[test]
fn second_half_mirrors_first_half() {
    for max_value in [1u8, 37, 100, 200, 255] {
        for phase in 1..=255u8 {
            assert_eq!(compute(max_value, phase), compute(max_value, 255 - phase));
        }
    }
}

#[test]
fn rises_then_falls() {
    for phase in 0..127u8 {
        assert!(compute(255, phase) <= compute(255, phase + 1));
    }
    for phase in 127..255u8 {
        assert!(compute(255, phase) >= compute(255, phase + 1));
    }
}

#[test]
fn zero_max_value_is_always_dark() {
    for phase in 0..=255u8 {
        assert_eq!(compute(0, phase), 0);
    }
}
