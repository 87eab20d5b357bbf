//! SVG path data generators.

use std::f64::consts::PI;
use std::fmt::Write;

/// Polyline path through `points`: `"M x,y L x,y ..."`. Empty string for
/// no points.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{x:.2},{y:.2}");
    }
    d
}

/// Annular sector (donut slice) between `start_angle` and `end_angle`,
/// measured in radians clockwise from 12 o'clock, d3-pie style.
pub fn annular_sector(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    // A full circle renders as a degenerate arc; pull the end in slightly.
    let sweep = (end_angle - start_angle).min(2.0 * PI - 1e-4);
    let end_angle = start_angle + sweep;

    let (ox0, oy0) = polar(cx, cy, outer_radius, start_angle);
    let (ox1, oy1) = polar(cx, cy, outer_radius, end_angle);
    let (ix0, iy0) = polar(cx, cy, inner_radius, start_angle);
    let (ix1, iy1) = polar(cx, cy, inner_radius, end_angle);
    let large = i32::from(sweep > PI);

    format!(
        "M{ox0:.2},{oy0:.2} \
         A{outer_radius:.2},{outer_radius:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} \
         A{inner_radius:.2},{inner_radius:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
    )
}

/// Midpoint of a slice at mid-angle and mid-radius; tooltip/label anchor.
pub fn sector_centroid(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> (f64, f64) {
    polar(
        cx,
        cy,
        (inner_radius + outer_radius) / 2.0,
        (start_angle + end_angle) / 2.0,
    )
}

/// Angle 0 points up, increasing clockwise.
fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_path_format() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(
            line_path(&[(0.0, 1.0), (2.5, 3.25)]),
            "M0.00,1.00L2.50,3.25"
        );
    }

    #[test]
    fn sector_quarter_turn_endpoints() {
        // Quarter slice from 12 to 3 o'clock on a unit donut at the origin.
        let d = annular_sector(0.0, 0.0, 0.5, 1.0, 0.0, PI / 2.0);
        assert!(d.starts_with("M0.00,-1.00"), "got {d}");
        assert!(d.contains("1.00,-0.00") || d.contains("1.00,0.00"), "got {d}");
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn centroid_sits_at_mid_angle_and_radius() {
        let (x, y) = sector_centroid(0.0, 0.0, 0.5, 1.0, 0.0, PI);
        // Mid-angle PI/2 (3 o'clock), mid-radius 0.75.
        assert!((x - 0.75).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn near_full_circle_does_not_collapse() {
        let d = annular_sector(0.0, 0.0, 0.5, 1.0, 0.0, 2.0 * PI);
        // Start and pulled-in end must differ so the arc still draws.
        assert!(d.starts_with("M0.00,-1.00"));
        assert!(d.contains(" 1 1 "));
    }
}
