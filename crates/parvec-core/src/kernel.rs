//! Sequential multiply-accumulate kernel
//!
//! The single-pass dot product every execution path bottoms out in. Partial
//! sums are accumulated in 64 bits even though the inputs and the stored
//! result are 32-bit, so intermediate products cannot overflow for realistic
//! vector sizes.

/// Dot product of two equal-length slices with a wide accumulator.
///
/// Empty slices yield 0. Equal lengths are a caller precondition; payload
/// validation screens lengths before any kernel call.
pub fn dot(v1: &[i32], v2: &[i32]) -> i64 {
    debug_assert_eq!(v1.len(), v2.len(), "dot kernel requires equal lengths");
    v1.iter()
        .zip(v2.iter())
        .map(|(&a, &b)| a as i64 * b as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        // 1*4 + 2*7 + 5*8 = 58
        assert_eq!(dot(&[1, 2, 5], &[4, 7, 8]), 58);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(dot(&[], &[]), 0);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(dot(&[-1, 2, -3], &[4, -5, 6]), -4 - 10 - 18);
    }

    #[test]
    fn test_wide_accumulator_does_not_overflow() {
        // Two i32::MAX * i32::MAX products overflow i32 by nine decimal
        // orders of magnitude but still fit in the i64 accumulator.
        let v = [i32::MAX, i32::MAX];
        let expected = 2 * (i32::MAX as i64 * i32::MAX as i64);
        assert_eq!(dot(&v, &v), expected);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(dot(&[7], &[-6]), -42);
    }
}
