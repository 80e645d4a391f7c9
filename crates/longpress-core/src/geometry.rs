//! Arc geometry and the progress easing curve.
//!
//! SVG has no "draw N% of a circle" primitive, so the progress ring is an
//! elliptical-arc path computed from polar coordinates. Angles are in
//! degrees, measured clockwise from 12 o'clock.

use std::f64::consts::PI;
use std::fmt;

use kurbo::Point;

/// Outer radius of the widget in view-box units.
pub const RADIUS: f64 = 50.0;
/// Stroke width of the ring and progress arc.
pub const STROKE_WIDTH: f64 = 8.0;
/// Stroke width of the completion circle.
pub const FINISHED_STROKE_WIDTH: f64 = 1.0;
/// Exponent of the ease-in curve.
pub const ACCEL_EXPONENT: f64 = 2.25;

/// Center of the widget in view-box units.
pub const CENTER: Point = Point::new(RADIUS, RADIUS);

/// Radius the ring and arc are stroked on.
pub fn ring_radius() -> f64 {
    RADIUS - STROKE_WIDTH / 2.0
}

/// Non-linear arc motion: little visible progress early, fast near the end.
pub fn accel(t: f64) -> f64 {
    t.clamp(0.0, 1.0).powf(ACCEL_EXPONENT)
}

/// Convert an angle on a circle to a point.
pub fn polar_to_cartesian(center: Point, radius: f64, degrees: f64) -> Point {
    let r = (degrees - 90.0) * PI / 180.0;
    Point::new(center.x + radius * r.cos(), center.y + radius * r.sin())
}

/// An SVG elliptical-arc path segment on a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// Point at the end angle; the path starts here.
    pub from: Point,
    /// Point at the start angle; the arc is drawn back to here.
    pub to: Point,
    pub radius: f64,
    /// SVG large-arc flag, set when the span exceeds 180 degrees.
    pub large_arc: bool,
}

impl ArcPath {
    /// The flag as it appears in path data.
    pub fn arc_sweep(&self) -> &'static str {
        if self.large_arc { "1" } else { "0" }
    }

    /// True when start and end coincide with a short arc (nothing visible).
    pub fn is_empty(&self) -> bool {
        !self.large_arc && (self.from - self.to).hypot() < 1e-9
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} 0 {} 0 {} {}",
            self.from.x,
            self.from.y,
            self.radius,
            self.radius,
            self.arc_sweep(),
            self.to.x,
            self.to.y
        )
    }
}

/// Create an arc centred at `center` between two angles (clockwise, degrees).
pub fn svg_arc_path(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        from: polar_to_cartesian(center, radius, end_angle),
        to: polar_to_cartesian(center, radius, start_angle),
        radius,
        large_arc: end_angle - start_angle > 180.0,
    }
}

/// The widget's progress arc for an already-eased fraction.
pub fn progress_arc(fraction: f64) -> ArcPath {
    svg_arc_path(CENTER, ring_radius(), 0.0, fraction.clamp(0.0, 1.0) * 360.0)
}

/// Sample the arc from 0 to `fraction` of a turn as a polyline.
///
/// Used by raster surfaces that can only stroke line segments.
pub fn arc_points(center: Point, radius: f64, fraction: f64, segments: usize) -> Vec<Point> {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 || segments == 0 {
        return vec![];
    }
    let end = fraction * 360.0;
    (0..=segments)
        .map(|i| polar_to_cartesian(center, radius, end * i as f64 / segments as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::BezPath;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_accel_endpoints() {
        assert_eq!(accel(0.0), 0.0);
        assert_eq!(accel(1.0), 1.0);
        assert!(close(accel(0.5), 0.5f64.powf(2.25)));
    }

    #[test]
    fn test_accel_monotonic() {
        let mut prev = accel(0.0);
        for i in 1..=1000 {
            let next = accel(i as f64 / 1000.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_accel_is_ease_in() {
        for i in 1..100 {
            let t = i as f64 / 100.0;
            assert!(accel(t) < t);
        }
    }

    #[test]
    fn test_accel_clamps_input() {
        assert_eq!(accel(-0.5), 0.0);
        assert_eq!(accel(3.0), 1.0);
    }

    #[test]
    fn test_polar_to_cartesian_cardinal_points() {
        let c = Point::new(50.0, 50.0);
        let top = polar_to_cartesian(c, 10.0, 0.0);
        assert!(close(top.x, 50.0) && close(top.y, 40.0));

        let right = polar_to_cartesian(c, 10.0, 90.0);
        assert!(close(right.x, 60.0) && close(right.y, 50.0));

        let bottom = polar_to_cartesian(c, 10.0, 180.0);
        assert!(close(bottom.x, 50.0) && close(bottom.y, 60.0));

        let left = polar_to_cartesian(c, 10.0, 270.0);
        assert!(close(left.x, 40.0) && close(left.y, 50.0));
    }

    #[test]
    fn test_empty_arc() {
        let arc = progress_arc(0.0);
        assert_eq!(arc.arc_sweep(), "0");
        assert!(arc.is_empty());
    }

    #[test]
    fn test_quarter_arc_is_short() {
        let arc = svg_arc_path(CENTER, ring_radius(), 0.0, 360.0 * 0.25);
        assert_eq!(arc.arc_sweep(), "0");
        assert!(close(arc.from.x, CENTER.x + ring_radius()));
        assert!(close(arc.to.y, CENTER.y - ring_radius()));
    }

    #[test]
    fn test_half_arc_boundary() {
        assert_eq!(svg_arc_path(CENTER, 10.0, 0.0, 180.0).arc_sweep(), "0");
        assert_eq!(svg_arc_path(CENTER, 10.0, 0.0, 180.5).arc_sweep(), "1");
    }

    #[test]
    fn test_full_arc_is_large() {
        let arc = progress_arc(1.0);
        assert_eq!(arc.arc_sweep(), "1");
        assert!(!arc.is_empty());
    }

    #[test]
    fn test_path_data_parses() {
        for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let d = progress_arc(p).to_string();
            assert!(d.starts_with("M "));
            assert!(BezPath::from_svg(&d).is_ok(), "unparseable path: {d}");
        }
    }

    #[test]
    fn test_arc_points() {
        assert!(arc_points(CENTER, 10.0, 0.0, 16).is_empty());

        let points = arc_points(CENTER, 10.0, 0.5, 4);
        assert_eq!(points.len(), 5);
        assert!(close(points[0].y, 40.0));
        assert!(close(points[4].y, 60.0));
        for p in &points {
            assert!(close((*p - CENTER).hypot(), 10.0));
        }
    }
}
