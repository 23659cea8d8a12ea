//! Fixed-point breathing waveform.
//!
//! Maps an 8-bit phase onto a parabola that approximates one lobe of a sine
//! wave. The second half of the cycle mirrors the first, so the LED rises and
//! falls along the same curve.

/// Phase at the middle of the cycle, where the curve peaks.
pub const PEAK_PHASE: u8 = 127;

/// Ceiling applied to the unscaled parabola before scaling to `max_value`.
const CURVE_CEILING: u16 = 127;

/// Computes the LED intensity for a phase within the breathing cycle.
///
/// Returns 0 at phase 0 and 255 and approaches `max_value` at phase 127. The
/// result never exceeds `max_value`, and `compute(m, p) == compute(m, 255 - p)`.
///
/// # Arguments
/// * `max_value` - Peak intensity
/// * `phase` - Position within the cycle
#[inline]
pub const fn compute(max_value: u8, phase: u8) -> u8 {
    let folded = fold(phase) as u16;

    // 127 * 128 fits comfortably in 16 bits
    let mut output = folded * (255 - folded) / 32;
    if output > CURVE_CEILING {
        output = CURVE_CEILING;
    }

    (output * max_value as u16 / CURVE_CEILING) as u8
}

/// Folds a phase into the rising half of the cycle, [0, 127].
#[inline]
const fn fold(phase: u8) -> u8 {
    if phase > PEAK_PHASE { 255 - phase } else { phase }
}
