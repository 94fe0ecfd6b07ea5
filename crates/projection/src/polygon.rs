//! Planar polygons for containment tests in projected space.

use std::f64::consts::PI;

/// Number of vertices used to approximate a circle.
pub const CIRCLE_VERTICES: usize = 45;

/// A point in projected (meter) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Approximate a circle of `radius` meters around `center` with
/// [`CIRCLE_VERTICES`] vertices.
///
/// Vertex `i` (1-based) sits at angle `i * 2pi / n`, so the last vertex
/// coincides with angle zero.
pub fn circle_polygon(center: PlanarPoint, radius: f64) -> Vec<PlanarPoint> {
    let theta = 2.0 * PI / CIRCLE_VERTICES as f64;

    (1..=CIRCLE_VERTICES)
        .map(|i| {
            let angle = theta * i as f64;
            PlanarPoint::new(
                radius * angle.cos() + center.x,
                radius * angle.sin() + center.y,
            )
        })
        .collect()
}

/// Check if a point is inside the polygon using ray casting algorithm.
///
/// The polygon is implicitly closed. Degenerate polygons (fewer than three
/// vertices) contain nothing.
pub fn point_in_polygon(polygon: &[PlanarPoint], point: PlanarPoint) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
