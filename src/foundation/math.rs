/// Truncate toward zero and clamp into the 8-bit channel range.
///
/// Non-finite input lands on the nearest bound (`NaN` maps to 0).
pub(crate) fn trunc_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.trunc().clamp(0.0, 255.0) as u8
}

/// Truncate a real ordinate toward zero and clamp it into `[0, max]`.
pub(crate) fn trunc_ordinate(v: f64, max: u32) -> u32 {
    if v.is_nan() {
        return 0;
    }
    v.trunc().clamp(0.0, f64::from(max)) as u32
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
