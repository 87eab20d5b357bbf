//! Chart colors: the fixed per-demographic series palette and the
//! sequential ramps behind the choropleth.

use sdd_data::Demographic;

/// Series/bar/slice color for a demographic.
pub fn series_color(demographic: Demographic) -> &'static str {
    match demographic {
        Demographic::Black => "#82ca9d",
        Demographic::Hispanic => "#ffc658",
        Demographic::Asian => "#ff8042",
        Demographic::Other => "#3d426b",
    }
}

/// Light/dark endpoints of the sequential map ramp per demographic.
pub fn ramp_endpoints(demographic: Demographic) -> (&'static str, &'static str) {
    match demographic {
        Demographic::Hispanic => ("#ffffd9", "#ffd700"),
        Demographic::Black => ("#edf8e9", "#005a32"),
        Demographic::Asian => ("#feedde", "#a63603"),
        Demographic::Other => ("#f2f0f7", "#54278f"),
    }
}

/// `n` evenly spaced colors between two hex endpoints (RGB interpolation).
pub fn ramp(from: &str, to: &str, n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let t = if n <= 1 {
                0.0
            } else {
                i as f64 / (n - 1) as f64
            };
            interpolate_hex(from, to, t)
        })
        .collect()
}

/// Linear blend of two `#rrggbb` colors at `t` in [0, 1].
pub fn interpolate_hex(from: &str, to: &str, t: f64) -> String {
    let (fr, fg, fb) = parse_hex(from).unwrap_or((0, 0, 0));
    let (tr, tg, tb) = parse_hex(to).unwrap_or((0, 0, 0));
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    Some((
        u8::from_str_radix(&hex[0..2], 16).ok()?,
        u8::from_str_radix(&hex[2..4], 16).ok()?,
        u8::from_str_radix(&hex[4..6], 16).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_endpoints_and_midpoint() {
        assert_eq!(interpolate_hex("#000000", "#ffffff", 0.0), "#000000");
        assert_eq!(interpolate_hex("#000000", "#ffffff", 1.0), "#ffffff");
        assert_eq!(interpolate_hex("#000000", "#ffffff", 0.5), "#808080");
    }

    #[test]
    fn ramp_is_monotone_in_size() {
        let colors = ramp("#000000", "#ffffff", 9);
        assert_eq!(colors.len(), 9);
        assert_eq!(colors.first().unwrap(), "#000000");
        assert_eq!(colors.last().unwrap(), "#ffffff");
        // No duplicates in a 9-step gray ramp.
        let mut unique = colors.clone();
        unique.dedup();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn every_demographic_has_distinct_colors() {
        let mut all: Vec<&str> = Demographic::ALL.iter().map(|&d| series_color(d)).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 4);
    }
}
