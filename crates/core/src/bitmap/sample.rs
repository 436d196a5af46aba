//! Narrowing of computed values back to 8-bit samples

use num_traits::ToPrimitive;

/// Clamp a computed value into the `[0, 255]` sample range.
///
/// Works for integer accumulators (morphology) and floating point
/// reductions (means, Gabor rescaling) alike. NaN maps to 0 and infinities
/// saturate at the nearest bound; callers that can produce non-finite values
/// are expected to report them before narrowing.
pub fn clamp_sample<T: ToPrimitive>(value: T) -> u8 {
    match value.to_f64() {
        Some(v) if v.is_nan() => 0,
        Some(v) => v.clamp(0.0, 255.0) as u8,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_integers() {
        assert_eq!(clamp_sample(-4i32), 0);
        assert_eq!(clamp_sample(128i32), 128);
        assert_eq!(clamp_sample(256i32), 255);
        assert_eq!(clamp_sample(i64::MAX), 255);
    }

    #[test]
    fn test_clamp_floats() {
        assert_eq!(clamp_sample(12.9f64), 12);
        assert_eq!(clamp_sample(f64::NAN), 0);
        assert_eq!(clamp_sample(f64::INFINITY), 255);
        assert_eq!(clamp_sample(f64::NEG_INFINITY), 0);
    }
}
