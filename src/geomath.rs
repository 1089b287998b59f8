//! Geodesic helpers shared by snapping and graph construction.
//!
//! Distances are always measured on the sphere with the haversine formula.
//! Segment projection flattens to a local equirectangular plane first, which
//! is only valid at campus scale; the plane ranks candidate projections, the
//! sphere reports the final distance.

use geo::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two lon/lat points, in meters.
///
/// Symmetric, and zero for identical points. The haversine term is clamped to
/// `[0, 1]` so that floating-point noise on sub-meter separations cannot feed
/// a negative value (or a value just above one) into the square root.
pub fn haversine_meters(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();

    let sin_dlat_half = ((b.y() - a.y()).to_radians() * 0.5).sin();
    let sin_dlon_half = ((b.x() - a.x()).to_radians() * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half
        + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Closest point on the straight segment `a`-`b` to an arbitrary point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Projected point, back in lon/lat.
    pub point: Point<f64>,
    /// Interpolation parameter along `a`-`b`, clamped to `[0, 1]`
    /// (`0.0` = at `a`, `1.0` = at `b`).
    pub t: f64,
    /// Geodesic distance from the queried point to `point`, in meters.
    pub distance_m: f64,
}

/// Projects `p` onto the segment `a`-`b`.
///
/// Longitudes are scaled by the cosine of the segment's mean latitude to get
/// a locally flat plane, the standard vector projection runs there with `t`
/// clamped to the segment, and the result is unscaled back to lon/lat. The
/// reported distance is haversine, not planar. Not meaningful near the poles
/// or across the antimeridian.
pub fn project_onto_segment(p: Point<f64>, a: Point<f64>, b: Point<f64>) -> SegmentProjection {
    let cos_lat = ((a.y() + b.y()) * 0.5).to_radians().cos();

    let (px, py) = (p.x() * cos_lat, p.y());
    let (ax, ay) = (a.x() * cos_lat, a.y());
    let (bx, by) = (b.x() * cos_lat, b.y());

    let (abx, aby) = (bx - ax, by - ay);
    let ab_len2 = abx * abx + aby * aby;

    // Degenerate segment (a == b) projects onto a.
    let t = if ab_len2 > 0.0 {
        (((px - ax) * abx + (py - ay) * aby) / ab_len2).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let point = Point::new((ax + abx * t) / cos_lat, ay + aby * t);

    SegmentProjection {
        point,
        t,
        distance_m: haversine_meters(p, point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ~1 degree of latitude in meters.
    const DEG_LAT_M: f64 = 111_194.9;

    #[test]
    fn haversine_identical_points() {
        let p = Point::new(17.031, 51.109);
        assert_eq!(haversine_meters(p, p), 0.0);
    }

    #[test]
    fn haversine_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0009, 0.0004);
        assert_eq!(haversine_meters(a, b), haversine_meters(b, a));
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let d = haversine_meters(a, b);
        assert!((d - DEG_LAT_M).abs() < 100.0, "got {d}");
    }

    #[test]
    fn haversine_stable_below_one_meter() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.000_000_1, 0.000_000_1);
        let d = haversine_meters(a, b);
        assert!(d.is_finite());
        assert!(d > 0.0 && d < 1.0, "got {d}");
    }

    #[test]
    fn projection_interior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.001, 0.0);
        let p = Point::new(0.0005, 0.0001);

        let proj = project_onto_segment(p, a, b);
        assert!((proj.t - 0.5).abs() < 1e-9);
        assert!((proj.point.x() - 0.0005).abs() < 1e-12);
        assert!(proj.point.y().abs() < 1e-12);
        // 0.0001 deg of latitude is ~11 m.
        assert!((proj.distance_m - 0.0001 * DEG_LAT_M).abs() < 0.5);
    }

    #[test]
    fn projection_clamps_to_both_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.001, 0.0);

        let before = project_onto_segment(Point::new(-0.002, 0.0), a, b);
        assert_eq!(before.t, 0.0);
        assert!((before.point.x() - a.x()).abs() < 1e-12);

        let after = project_onto_segment(Point::new(0.004, 0.0), a, b);
        assert_eq!(after.t, 1.0);
        assert!((after.point.x() - b.x()).abs() < 1e-12);
    }

    #[test]
    fn projection_degenerate_segment() {
        let a = Point::new(0.001, 0.001);
        let p = Point::new(0.002, 0.001);

        let proj = project_onto_segment(p, a, a);
        assert_eq!(proj.t, 0.0);
        assert!((proj.point.x() - a.x()).abs() < 1e-12);
        assert!((proj.point.y() - a.y()).abs() < 1e-12);
        assert!((proj.distance_m - haversine_meters(p, a)).abs() < 1e-6);
    }
}
