//! Marker layout: three squares placed along a finger's principal axis.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use serde::Serialize;

use crate::analysis::{centroid, principal_axis};
use crate::config::LayoutConfig;
use crate::consts::MARKER_COUNT;
use crate::geom::Point;

/// A square of side `size` centred on `center`, rotated by `angle_rad`.
///
/// The scene hands backends its [`corners`](Self::corners) so they can stroke
/// the outline directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientedSquare {
    pub center: Point,
    pub angle_rad: f64,
    pub size: f64,
}

impl OrientedSquare {
    /// The four corners in canvas space, clockwise from the local top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let h = self.size / 2.0;
        let (sin, cos) = self.angle_rad.sin_cos();
        [(-h, -h), (h, -h), (h, h), (-h, h)].map(|(lx, ly)| Point {
            x: self.center.x + lx * cos - ly * sin,
            y: self.center.y + lx * sin + ly * cos,
        })
    }
}

/// Lay out the marker squares for a point set.
///
/// - empty set: no squares;
/// - one point: an unrotated vertical stack centred on the point;
/// - two or more: squares along the principal axis, the middle one on the
///   centroid, each rotated to the axis angle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_marker_squares(points: &[Point], square_size: f64, square_gap: f64) -> Vec<OrientedSquare> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };
    let spacing = square_size + square_gap;

    let Some(line) = principal_axis(points) else {
        let total_height = MARKER_COUNT as f64 * square_size + (MARKER_COUNT - 1) as f64 * square_gap;
        let top = center.y - total_height / 2.0 + square_size / 2.0;
        return (0..MARKER_COUNT)
            .map(|i| OrientedSquare {
                center: Point::new(center.x, top + i as f64 * spacing),
                angle_rad: 0.0,
                size: square_size,
            })
            .collect();
    };

    let angle = line.angle_rad;
    (0..MARKER_COUNT)
        .map(|i| {
            let offset = (i as f64 - 1.0) * spacing;
            OrientedSquare { center: center.along(angle, offset), angle_rad: angle, size: square_size }
        })
        .collect()
}

/// [`layout_marker_squares`] with sizes taken from a [`LayoutConfig`].
#[must_use]
pub fn layout_with(points: &[Point], config: &LayoutConfig) -> Vec<OrientedSquare> {
    layout_marker_squares(points, config.square_size, config.square_gap)
}
