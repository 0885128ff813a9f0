//! Canonical signed distance functions in the primitive's local frame.
//!
//! All shapes are unit sized and centered on the origin; placement is the
//! job of the gene's transform.

use crate::types::Point;

/// ‖p‖ − 1
pub fn disk(p: Point) -> f64 {
    p.length() - 1.0
}

/// Chebyshev distance to the [-1, 1]² square
pub fn square(p: Point) -> f64 {
    p.x.abs().max(p.y.abs()) - 1.0
}

/// Distance to the nearest edge, negative inside.
///
/// Inside/outside comes from crossing-number parity so the result does not
/// depend on vertex winding order.
pub fn polygon(p: Point, vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return f64::INFINITY;
    }

    let mut min_dist_sq = f64::INFINITY;
    let mut inside = false;

    let mut prev = vertices[vertices.len() - 1];
    for &curr in vertices {
        min_dist_sq = min_dist_sq.min(segment_distance_sq(p, prev, curr));

        if (curr.y > p.y) != (prev.y > p.y) {
            let x_cross = (prev.x - curr.x) * (p.y - curr.y) / (prev.y - curr.y) + curr.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        prev = curr;
    }

    let dist = min_dist_sq.sqrt();
    if inside {
        -dist
    } else {
        dist
    }
}

fn segment_distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.dot(ab);
    let t = if len_sq > 0.0 {
        (ap.dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = a + ab * t;
    let delta = p - closest;
    delta.dot(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0.0, 1.0), Point::new(-1.0, -1.0), Point::new(1.0, -1.0)]
    }

    #[test]
    fn test_disk() {
        assert_eq!(disk(Point::ORIGIN), -1.0);
        assert_eq!(disk(Point::new(1.0, 0.0)), 0.0);
        assert!((disk(Point::new(3.0, 4.0)) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_square() {
        assert_eq!(square(Point::ORIGIN), -1.0);
        assert!((square(Point::new(0.5, -0.9)) + 0.1).abs() < 1e-12);
        assert_eq!(square(Point::new(2.0, 2.0)), 1.0);
    }

    #[test]
    fn test_polygon_centroid_inside() {
        let tri = triangle();
        let d = polygon(Point::new(0.0, -1.0 / 3.0), &tri);
        assert!(d < 0.0, "centroid should be inside, got {}", d);
        assert!(polygon(Point::new(10.0, 10.0), &tri) > 0.0);
    }

    #[test]
    fn test_polygon_orientation_independent() {
        let ccw = triangle();
        let mut cw = ccw.clone();
        cw.reverse();

        for p in [Point::new(0.0, -0.5), Point::new(0.9, 0.9), Point::new(-0.2, 0.1)] {
            assert!((polygon(p, &ccw) - polygon(p, &cw)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_polygon_distance_magnitude() {
        let unit_square = vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        assert!((polygon(Point::ORIGIN, &unit_square) + 1.0).abs() < 1e-12);
        assert!((polygon(Point::new(3.0, 0.0), &unit_square) - 2.0).abs() < 1e-12);
    }
}
