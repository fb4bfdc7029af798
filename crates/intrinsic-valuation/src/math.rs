//! Numeric primitives shared by every valuation formula.

/// Divide, returning `0.0` instead of a non-finite result.
///
/// Covers a zero divisor as well as infinite or NaN operands.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() { quotient } else { 0.0 }
}

/// Net present value of `future_value` received `years` from now.
///
/// With `years == 0` the future value is returned unchanged.
pub fn npv(future_value: f64, discount_rate: f64, years: u32) -> f64 {
    if years == 0 {
        return future_value;
    }
    future_value / (1.0 + discount_rate).powi(years as i32)
}

/// Round to `digits` decimal places, ties to even. Non-finite input
/// becomes `0.0`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

/// Round to cents.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Growth rate implied by the first and last values of a sequence.
///
/// `sign * (|last / first|^(1 / n) - 1)` where `n` is the number of values
/// (not the number of intervals) and `sign` is negative when either endpoint
/// is negative. Fewer than two values, or a zero first value, yield `0.0`.
pub fn growth_rate(values: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return 0.0;
    };
    if values.len() <= 1 || first == 0.0 {
        return 0.0;
    }

    let sign = if first < 0.0 || last < 0.0 { -1.0 } else { 1.0 };
    let rate = sign * ((last / first).abs().powf(1.0 / values.len() as f64) - 1.0);
    if rate.is_finite() { rate } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 2.0, 5.0)]
    #[case(10.0, 0.0, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(-9.0, 3.0, -3.0)]
    #[case(f64::INFINITY, 1.0, 0.0)]
    fn test_safe_divide(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(safe_divide(a, b), expected);
    }

    #[test]
    fn test_npv() {
        assert_eq!(npv(1000.0, 0.10, 0), 1000.0);
        assert_relative_eq!(npv(1000.0, 0.10, 1), 909.0909, epsilon = 1e-3);
        assert_relative_eq!(npv(1000.0, 0.10, 2), 826.4463, epsilon = 1e-3);
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[42.0], 0.0)]
    #[case(&[-5.0], 0.0)]
    #[case(&[0.0, 10.0], 0.0)]
    fn test_growth_rate_insufficient_data(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(growth_rate(values), expected);
    }

    #[test]
    fn test_growth_rate_uses_value_count_as_exponent() {
        assert_relative_eq!(growth_rate(&[100.0, 200.0]), 2f64.sqrt() - 1.0, epsilon = 1e-12);
        assert_relative_eq!(growth_rate(&[100.0, 200.0]), 0.4142, epsilon = 1e-4);
        // Three values: cube root of the end-to-end ratio.
        assert_relative_eq!(
            growth_rate(&[100.0, 150.0, 800.0]),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_growth_rate_sign_rule() {
        // Negative start: magnitude ratio, negated.
        assert_relative_eq!(growth_rate(&[-100.0, 400.0]), -1.0, epsilon = 1e-12);
        // Negative end.
        assert_relative_eq!(growth_rate(&[100.0, -25.0]), 0.5, epsilon = 1e-12);
        // Shrinking positive series is negative.
        assert!(growth_rate(&[400.0, 100.0]) < 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(16.666_666), 16.67);
        assert_eq!(round2(-0.004), -0.0);
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }

    #[rstest]
    #[case(0.125, 0.12)]
    #[case(0.625, 0.62)]
    #[case(0.375, 0.38)]
    #[case(-0.125, -0.12)]
    #[case(2.675, 2.67)]
    fn test_round2_half_cent_ties_to_even(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }
}
