//! Point-set analysis: centroid and principal direction.
//!
//! Both functions are pure and order-independent over their input. They are
//! evaluated on every redraw, so they allocate nothing.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use serde::Serialize;

use crate::consts::DIRECTION_LINE_HALF_LENGTH;
use crate::geom::Point;

/// Principal-direction line through a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionLine {
    /// Endpoint behind the centroid along the direction.
    pub p1: Point,
    /// Endpoint ahead of the centroid along the direction.
    pub p2: Point,
    pub centroid: Point,
    /// Angle of the major axis in radians, in `[-π/2, π/2]`.
    pub angle_rad: f64,
}

/// Second-moment sums about the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scatter {
    sxx: f64,
    syy: f64,
    sxy: f64,
}

impl Scatter {
    fn about(points: &[Point], centroid: Point) -> Self {
        points.iter().fold(Self { sxx: 0.0, syy: 0.0, sxy: 0.0 }, |acc, p| {
            let dx = p.x - centroid.x;
            let dy = p.y - centroid.y;
            Self {
                sxx: acc.sxx + dx * dx,
                syy: acc.syy + dy * dy,
                sxy: acc.sxy + dx * dy,
            }
        })
    }

    /// Closed-form angle of the major axis of the scatter ellipse.
    ///
    /// When every point coincides this is `atan2(0, 0) = 0`, a horizontal axis.
    fn major_axis_angle(self) -> f64 {
        0.5 * (2.0 * self.sxy).atan2(self.sxx - self.syy)
    }
}

/// Arithmetic mean of the points, or `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Direction of greatest positional variance, extended through the centroid.
///
/// Returns `None` for fewer than two points, where no direction exists.
#[must_use]
pub fn principal_axis(points: &[Point]) -> Option<DirectionLine> {
    if points.len() < 2 {
        return None;
    }
    let centroid = centroid(points)?;
    let angle_rad = Scatter::about(points, centroid).major_axis_angle();

    Some(DirectionLine {
        p1: centroid.along(angle_rad, -DIRECTION_LINE_HALF_LENGTH),
        p2: centroid.along(angle_rad, DIRECTION_LINE_HALF_LENGTH),
        centroid,
        angle_rad,
    })
}
