//! Closed-form ordinary least squares over paired samples.

use serde::Serialize;

/// Slope/intercept of the OLS fit plus Pearson correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub correlation: f64,
}

/// Fit `y = slope * x + intercept` over `(x, y)` pairs.
///
/// Returns `None` with fewer than 2 points or zero variance in x, so the
/// caller never divides by zero or draws a line through a single point.
pub fn linear_regression(points: &[(f64, f64)]) -> Option<RegressionResult> {
    let n = points.len() as f64;
    if points.len() < 2 {
        return None;
    }

    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sum_yy: f64 = points.iter().map(|(_, y)| y * y).sum();

    let x_variance = n * sum_xx - sum_x * sum_x;
    if x_variance == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / x_variance;
    let intercept = (sum_y - slope * sum_x) / n;

    let denom = (x_variance * (n * sum_yy - sum_y * sum_y)).sqrt();
    let correlation = if denom == 0.0 {
        // Zero y-variance: the fit is exact but r is undefined; report 0.
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denom
    };

    Some(RegressionResult {
        slope,
        intercept,
        correlation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive_fit() {
        let result = linear_regression(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
        assert!((result.slope - 2.0).abs() < 1e-12);
        assert!(result.intercept.abs() < 1e-12);
        assert!((result.correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_correlation() {
        let result = linear_regression(&[(0.0, 10.0), (1.0, 8.0), (2.0, 6.0)]).unwrap();
        assert!((result.slope + 2.0).abs() < 1e-12);
        assert!((result.correlation + 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points() {
        assert!(linear_regression(&[]).is_none());
        assert!(linear_regression(&[(1.0, 1.0)]).is_none());
    }

    #[test]
    fn zero_x_variance() {
        assert!(linear_regression(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]).is_none());
    }

    #[test]
    fn flat_y_still_fits_with_zero_slope() {
        let result = linear_regression(&[(1.0, 3.0), (2.0, 3.0), (3.0, 3.0)]).unwrap();
        assert_eq!(result.slope, 0.0);
        assert_eq!(result.intercept, 3.0);
        assert_eq!(result.correlation, 0.0);
    }
}
