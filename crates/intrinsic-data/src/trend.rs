//! Regression-based trend estimates of statement fields.
//!
//! Fits a least-squares polynomial through a dated series and evaluates it at
//! an arbitrary date. Time is measured in years since the first observation,
//! which keeps the normal equations well conditioned for low orders.

use crate::history::DatedValue;
use chrono::NaiveDate;
use ndarray::{Array1, Array2};

const DAYS_PER_YEAR: f64 = 365.25;

/// Estimates the value of a dated series at a target date.
pub trait TrendEstimator: Send + Sync {
    /// Estimated value at `date`, or `None` when the series cannot support an estimate.
    fn estimate(&self, series: &[DatedValue], date: NaiveDate) -> Option<f64>;
}

/// Ordinary least-squares polynomial trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialTrend {
    order: usize,
}

impl PolynomialTrend {
    /// Create a trend of the given polynomial order.
    pub const fn new(order: usize) -> Self {
        Self { order }
    }

    /// Straight-line trend.
    pub const fn linear() -> Self {
        Self::new(1)
    }

    /// Polynomial order.
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Fitted coefficients, constant term first.
    pub fn fit(&self, series: &[DatedValue]) -> Option<Array1<f64>> {
        let terms = self.order + 1;
        let first = series.first()?.date;
        if series.len() < terms {
            return None;
        }

        let n = series.len();
        let mut design = Array2::<f64>::zeros((n, terms));
        let mut targets = Array1::<f64>::zeros(n);
        for (row, point) in series.iter().enumerate() {
            let x = years_between(first, point.date);
            let mut power = 1.0;
            for col in 0..terms {
                design[[row, col]] = power;
                power *= x;
            }
            targets[row] = point.value;
        }

        let normal = design.t().dot(&design);
        let rhs = design.t().dot(&targets);
        solve(normal, rhs)
    }
}

impl Default for PolynomialTrend {
    fn default() -> Self {
        Self::linear()
    }
}

impl TrendEstimator for PolynomialTrend {
    fn estimate(&self, series: &[DatedValue], date: NaiveDate) -> Option<f64> {
        let coefficients = self.fit(series)?;
        let x = years_between(series.first()?.date, date);

        let mut power = 1.0;
        let mut value = 0.0;
        for c in &coefficients {
            value += c * power;
            power *= x;
        }

        value.is_finite().then_some(value)
    }
}

fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Gaussian elimination with partial pivoting. `None` when singular.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = b.len();

    for pivot in 0..n {
        let best = (pivot..n).max_by(|&i, &j| a[[i, pivot]].abs().total_cmp(&a[[j, pivot]].abs()))?;
        if a[[best, pivot]].abs() < 1e-12 {
            return None;
        }
        if best != pivot {
            for col in 0..n {
                a.swap([pivot, col], [best, col]);
            }
            b.swap(pivot, best);
        }

        for row in (pivot + 1)..n {
            let factor = a[[row, pivot]] / a[[pivot, pivot]];
            for col in pivot..n {
                a[[row, col]] -= factor * a[[pivot, col]];
            }
            b[row] -= factor * b[pivot];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|col| a[[row, col]] * x[col]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn yearly(values: &[f64]) -> Vec<DatedValue> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DatedValue::new(date(2010 + i as i32, 1, 1), *v))
            .collect()
    }

    #[test]
    fn test_linear_trend_through_exact_line() {
        let series = yearly(&[10.0, 12.0, 14.0, 16.0]);
        let trend = PolynomialTrend::linear();

        let at_start = trend.estimate(&series, date(2010, 1, 1)).unwrap();
        assert_relative_eq!(at_start, 10.0, epsilon = 0.01);

        // Roughly two units per year, extrapolated past the data.
        let later = trend.estimate(&series, date(2016, 1, 1)).unwrap();
        assert_relative_eq!(later, 22.0, epsilon = 0.05);
    }

    #[test]
    fn test_constant_series_has_flat_trend() {
        let series = yearly(&[5.0, 5.0, 5.0]);
        let estimate = PolynomialTrend::linear()
            .estimate(&series, date(2030, 6, 1))
            .unwrap();
        assert_relative_eq!(estimate, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_fit_recovers_curve() {
        let series = yearly(&[0.0, 1.0, 4.0, 9.0, 16.0]);
        let coefficients = PolynomialTrend::new(2).fit(&series).unwrap();
        assert_eq!(coefficients.len(), 3);
        // Leap years make x drift slightly from whole numbers.
        assert_relative_eq!(coefficients[2], 1.0, epsilon = 0.05);
    }

    #[test]
    fn test_insufficient_points() {
        let trend = PolynomialTrend::linear();
        assert!(trend.estimate(&[], date(2020, 1, 1)).is_none());
        assert!(trend.estimate(&yearly(&[3.0]), date(2020, 1, 1)).is_none());
    }

    #[test]
    fn test_singular_design() {
        // Two observations on the same day cannot fix a slope.
        let series = vec![
            DatedValue::new(date(2020, 1, 1), 1.0),
            DatedValue::new(date(2020, 1, 1), 2.0),
        ];
        assert!(PolynomialTrend::linear().estimate(&series, date(2021, 1, 1)).is_none());
    }
}
