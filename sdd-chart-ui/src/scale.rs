//! Positional and value scales mapping data space to pixel space.

use chrono::{Datelike, NaiveDate};

/// Linear mapping from a numeric domain to a pixel range.
///
/// Ranges may be inverted (`range.0 > range.1`), which is the normal case
/// for y-axes in SVG coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        LinearScale { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// Ordinal scale giving each category an equal-width band with padding,
/// matching d3's band scale arithmetic (inner padding = outer padding).
#[derive(Debug, Clone)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(categories: Vec<String>, range: (f64, f64), padding: f64) -> BandScale {
        BandScale {
            categories,
            range,
            padding,
        }
    }

    fn step(&self) -> f64 {
        let n = self.categories.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (n + self.padding)
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (self.padding + index as f64)
    }

    /// Left edge of the band for a category, if present.
    pub fn position_of(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .position(|c| c == category)
            .map(|i| self.position(i))
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Time scale over calendar dates, used for year axes.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> TimeScale {
        TimeScale {
            inner: LinearScale::new(
                (
                    domain.0.num_days_from_ce() as f64,
                    domain.1.num_days_from_ce() as f64,
                ),
                range,
            ),
        }
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        self.inner.scale(date.num_days_from_ce() as f64)
    }
}

/// January 1st of `year`, the x-position a yearly observation plots at.
///
/// Years outside chrono's representable range saturate to its first/last
/// date, so a wild year in the CSV skews one axis instead of panicking.
pub fn year_date(year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(date) => date,
        None if year > 0 => NaiveDate::MAX,
        None => NaiveDate::MIN,
    }
}

/// Round tick values over `[min, max]`, stepped at 1/2/5 x 10^k.
pub fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !(max > min) {
        return vec![min];
    }
    let raw_step = (max - min) / count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    } * magnitude;

    let mut ticks = Vec::new();
    let mut tick = (min / step).ceil() * step;
    let limit = max + step * 1e-9;
    while tick <= limit {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Integer with thousands separators: `52499` → `"52,499"`.
pub fn format_int(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

/// Compact SI-style label for large axis values: `6000000` → `"6M"`.
pub fn format_si(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e6 {
        trim_zero(value / 1e6, "M")
    } else if abs >= 1e3 {
        trim_zero(value / 1e3, "k")
    } else {
        trim_zero(value, "")
    }
}

fn trim_zero(value: f64, suffix: &str) -> String {
    let s = format!("{value:.1}");
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{s}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 800.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 400.0);
        // Inverted pixel range, the y-axis case.
        let y = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(y.scale(0.0), 300.0);
        assert_eq!(y.scale(100.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.scale(5.0), 50.0);
    }

    #[test]
    fn band_positions_with_padding() {
        let scale = BandScale::new(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            (0.0, 430.0),
            0.3,
        );
        let step = 430.0 / 4.3;
        assert!((scale.bandwidth() - step * 0.7).abs() < 1e-9);
        assert!((scale.position(0) - step * 0.3).abs() < 1e-9);
        assert!((scale.position(1) - step * 1.3).abs() < 1e-9);
        assert_eq!(scale.position_of("c"), Some(scale.position(2)));
        assert_eq!(scale.position_of("z"), None);
    }

    #[test]
    fn extreme_years_saturate_instead_of_panicking() {
        // A row like "300000,1,2,3,4" parses to a valid i32 year and
        // survives loading, so the scale has to absorb it.
        assert_eq!(year_date(300_000), NaiveDate::MAX);
        assert_eq!(year_date(-300_000), NaiveDate::MIN);
        assert!(year_date(-300_000) < year_date(2011));
        assert!(year_date(2011) < year_date(300_000));
        let scale = TimeScale::new((year_date(2011), year_date(300_000)), (0.0, 100.0));
        assert!(scale.scale(year_date(2016)).is_finite());
    }

    #[test]
    fn time_scale_is_linear_in_days() {
        let scale = TimeScale::new((year_date(2011), year_date(2021)), (0.0, 570.0));
        assert_eq!(scale.scale(year_date(2011)), 0.0);
        assert_eq!(scale.scale(year_date(2021)), 570.0);
        let mid = scale.scale(year_date(2016));
        assert!(mid > 280.0 && mid < 290.0);
    }

    #[test]
    fn ticks_are_round_and_cover_domain() {
        let ticks = linear_ticks(0.0, 63522.0, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(ticks.iter().all(|t| t % 10000.0 == 0.0));
        assert!(*ticks.last().unwrap() <= 63522.0);
        assert_eq!(linear_ticks(5.0, 5.0, 4), vec![5.0]);
    }

    #[test]
    fn int_formatting() {
        assert_eq!(format_int(52499.0), "52,499");
        assert_eq!(format_int(999.0), "999");
        assert_eq!(format_int(1000.0), "1,000");
        assert_eq!(format_int(-1234567.0), "-1,234,567");
    }

    #[test]
    fn si_formatting() {
        assert_eq!(format_si(6_000_000.0), "6M");
        assert_eq!(format_si(5_500_000.0), "5.5M");
        assert_eq!(format_si(10_000.0), "10k");
        assert_eq!(format_si(42.0), "42");
    }
}
