//! Scene building: session state to an ordered list of drawing primitives.
//!
//! The scene is the boundary between the geometry engine and any drawing
//! backend. Primitives are listed bottom layer first: committed zones, the
//! draft zone outline, then per finger its dots, direction line and marker
//! squares.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::analysis::principal_axis;
use crate::config::LayoutConfig;
use crate::geom::Point;
use crate::markers::{OrientedSquare, layout_with};
use crate::session::SessionStore;

/// One thing for a backend to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Committed zone: filled and outlined closed polygon.
    Zone { points: Vec<Point> },
    /// Zone being painted: dashed open polyline.
    DraftZone { points: Vec<Point> },
    /// Captured point: filled circle.
    Dot { center: Point, radius: f64, color: &'static str },
    /// Principal direction: dashed segment.
    DirectionLine { from: Point, to: Point, color: &'static str },
    /// Marker: stroked rotated square. `corners` is the outline in canvas
    /// space, so backends need no transform to draw it.
    Square { square: OrientedSquare, corners: [Point; 4], color: &'static str },
}

/// Build the full scene for the current session.
#[must_use]
pub fn build(session: &SessionStore, config: &LayoutConfig) -> Vec<Primitive> {
    let mut out = Vec::new();

    for zone in session.zones() {
        out.push(Primitive::Zone { points: zone.points().to_vec() });
    }

    let draft = session.draft_zone();
    if draft.len() > 1 {
        out.push(Primitive::DraftZone { points: draft.to_vec() });
    }

    let radius = config.dot_size / 2.0;
    for (finger, points) in session.fingers() {
        let color = finger.color();
        out.extend(points.iter().map(|&center| Primitive::Dot { center, radius, color }));

        if let Some(line) = principal_axis(points) {
            out.push(Primitive::DirectionLine { from: line.p1, to: line.p2, color });
        }

        out.extend(
            layout_with(points, config)
                .into_iter()
                .map(|square| Primitive::Square { square, corners: square.corners(), color }),
        );
    }

    out
}
