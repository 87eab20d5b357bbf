//! Equal-count color bucketing for skewed value distributions.
//!
//! A linear color scale over state-level degree counts washes out because a
//! handful of large states dominate the domain. Quantile bucketing assigns
//! each color to an equal share of the observed values instead.

/// Maps raw values to one of N discrete colors by quantile.
///
/// Thresholds sit at the k/N quantiles of the input values (linear
/// interpolation between order statistics); lookup picks the bucket whose
/// quantile range contains the value.
#[derive(Debug, Clone)]
pub struct QuantileScale {
    thresholds: Vec<f64>,
    colors: Vec<String>,
}

impl QuantileScale {
    /// Build a scale over the observed `values` with one bucket per color.
    ///
    /// Returns `None` when there are no values or no colors.
    pub fn new(values: &[f64], colors: Vec<String>) -> Option<QuantileScale> {
        if values.is_empty() || colors.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let n = colors.len();
        let thresholds = (1..n)
            .map(|k| quantile_sorted(&sorted, k as f64 / n as f64))
            .collect();

        Some(QuantileScale { thresholds, colors })
    }

    /// The color bucket for `value`.
    pub fn color(&self, value: f64) -> &str {
        let idx = self.thresholds.partition_point(|t| *t <= value);
        &self.colors[idx.min(self.colors.len() - 1)]
    }

    /// Bucket boundaries, one fewer than the color count.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

/// Quantile of an ascending-sorted slice with linear interpolation.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("c{i}")).collect()
    }

    #[test]
    fn median_threshold_for_two_buckets() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let scale = QuantileScale::new(&values, colors(2)).unwrap();
        assert_eq!(scale.thresholds(), &[5.5]);
        assert_eq!(scale.color(5.0), "c0");
        assert_eq!(scale.color(6.0), "c1");
    }

    #[test]
    fn buckets_hold_equal_counts_on_skewed_data() {
        // Heavily skewed: a linear scale would put almost everything in the
        // bottom bucket; quantiles split the mass 50/50.
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0];
        let scale = QuantileScale::new(&values, colors(2)).unwrap();
        let low = values.iter().filter(|v| scale.color(**v) == "c0").count();
        let high = values.iter().filter(|v| scale.color(**v) == "c1").count();
        assert_eq!(low, 5);
        assert_eq!(high, 5);
    }

    #[test]
    fn out_of_range_values_clamp_to_end_buckets() {
        let values = vec![10.0, 20.0, 30.0];
        let scale = QuantileScale::new(&values, colors(3)).unwrap();
        assert_eq!(scale.color(-100.0), "c0");
        assert_eq!(scale.color(1e9), "c2");
    }

    #[test]
    fn degenerate_inputs() {
        assert!(QuantileScale::new(&[], colors(3)).is_none());
        assert!(QuantileScale::new(&[1.0], Vec::new()).is_none());
        // A single value is fine: everything lands in one bucket.
        let scale = QuantileScale::new(&[42.0], colors(3)).unwrap();
        assert_eq!(scale.color(42.0), "c2");
    }
}
