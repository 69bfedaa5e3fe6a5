//! Exclusion zones and point containment.
//!
//! A zone is a closed polygon painted by the user. Once committed it
//! suppresses capture of any point falling inside it. Containment uses the
//! even-odd ray-casting rule; points exactly on an edge land on whichever
//! side the crossing formula puts them.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_ZONE_VERTICES;
use crate::geom::Point;

/// A committed exclusion zone. Always has at least three vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Zone {
    points: Vec<Point>,
}

/// Rejected attempt to build a [`Zone`] from too few vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a zone needs at least 3 vertices, got {0}")]
pub struct TooFewVertices(pub usize);

impl Zone {
    /// Build a zone from an ordered vertex list, closed implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`TooFewVertices`] when fewer than three vertices are given.
    pub fn new(points: Vec<Point>) -> Result<Self, TooFewVertices> {
        if points.len() < MIN_ZONE_VERTICES {
            return Err(TooFewVertices(points.len()));
        }
        Ok(Self { points })
    }

    /// Vertices in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether `point` lies inside this zone.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, &self.points)
    }
}

impl TryFrom<Vec<Point>> for Zone {
    type Error = TooFewVertices;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Zone> for Vec<Point> {
    fn from(zone: Zone) -> Self {
        zone.points
    }
}

/// Even-odd ray-casting containment test.
///
/// A horizontal ray is cast from `point` towards +x; each polygon edge it
/// crosses flips the result. Polygons with fewer than three vertices contain
/// nothing.
#[must_use]
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < MIN_ZONE_VERTICES {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, vi) in polygon.iter().enumerate() {
        let vj = polygon[j];
        // The first clause fails whenever vi.y == vj.y, so the division never sees a zero denominator.
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < vi.x + (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `point` falls inside any of `zones`. Stops at the first match.
#[must_use]
pub fn point_in_any_zone(point: Point, zones: &[Zone]) -> bool {
    zones.iter().any(|zone| zone.contains(point))
}
