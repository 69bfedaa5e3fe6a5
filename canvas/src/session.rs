//! Session model: fingers, their captured points, and the exclusion zones.
//!
//! `SessionStore` owns everything a redraw needs. It enforces the two capture
//! rules: a point landing in a committed zone is never recorded, and an
//! in-progress zone is only committed once it has enough vertices to enclose
//! an area. The renderer reads it through [`SessionStore::fingers`],
//! [`SessionStore::zones`] and [`SessionStore::draft_zone`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{DirectionLine, centroid, principal_axis};
use crate::config::LayoutConfig;
use crate::geom::Point;
use crate::markers::{OrientedSquare, layout_with};
use crate::zone::{Zone, point_in_any_zone};

/// Which finger a point set belongs to.
///
/// Serializes as its lowercase name. Deserializes from either the name or the
/// 0-based finger id (`0` = thumb through `4` = pinky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "FingerRef")]
pub enum Finger {
    #[default]
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in index order.
    pub const ALL: [Self; 5] = [Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Finger for a 0-based index, or `None` past the pinky.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based index (thumb = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thumb => "Thumb",
            Self::Index => "Index",
            Self::Middle => "Middle",
            Self::Ring => "Ring",
            Self::Pinky => "Pinky",
        }
    }

    /// Palette colour used for this finger's dots, line and markers.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Thumb => "#4a4a4a",
            Self::Index => "#14b8a6",
            Self::Middle => "#0891b2",
            Self::Ring => "#a855f7",
            Self::Pinky => "#ec4899",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FingerError {
    #[error("finger id {0} is out of range, expected 0-4")]
    OutOfRange(u64),
    #[error("unknown finger name {0:?}")]
    UnknownName(String),
}

/// Wire form of a finger: numeric id or name.
#[derive(Deserialize)]
#[serde(untagged)]
enum FingerRef {
    Id(u64),
    Name(String),
}

impl TryFrom<FingerRef> for Finger {
    type Error = FingerError;

    fn try_from(value: FingerRef) -> Result<Self, Self::Error> {
        match value {
            FingerRef::Id(id) => match usize::try_from(id) {
                Ok(index) => Self::from_index(index),
                Err(_) => None,
            }
            .ok_or(FingerError::OutOfRange(id)),
            FingerRef::Name(name) => Self::ALL
                .into_iter()
                .find(|f| f.name().eq_ignore_ascii_case(&name))
                .ok_or(FingerError::UnknownName(name)),
        }
    }
}

/// Result of offering a point for capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The point was appended to the finger's set.
    Admitted,
    /// The point fell inside a committed zone and was dropped.
    Suppressed,
}

/// Result of ending a zone gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEnd {
    /// The draft became committed zone number `index`.
    Committed { index: usize },
    /// The draft had fewer than three vertices and was dropped.
    Discarded { vertices: usize },
}

/// Geometry derived from one finger's points, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerAnalysis {
    pub finger: Finger,
    pub point_count: usize,
    pub centroid: Option<Point>,
    pub direction: Option<DirectionLine>,
    pub squares: Vec<OrientedSquare>,
}

/// In-memory session state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    fingers: BTreeMap<Finger, Vec<Point>>,
    zones: Vec<Zone>,
    draft: Vec<Point>,
}

impl SessionStore {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Capture ---

    /// Offer `point` to `finger`'s set, unless a committed zone covers it.
    pub fn capture(&mut self, finger: Finger, point: Point) -> Capture {
        if point_in_any_zone(point, &self.zones) {
            tracing::debug!(finger = finger.name(), x = point.x, y = point.y, "point suppressed by zone");
            return Capture::Suppressed;
        }
        let points = self.fingers.entry(finger).or_default();
        points.push(point);
        tracing::debug!(finger = finger.name(), x = point.x, y = point.y, count = points.len(), "point captured");
        Capture::Admitted
    }

    // --- Zones ---

    /// Start a new draft zone at `point`, replacing any unfinished draft.
    pub fn begin_zone(&mut self, point: Point) {
        self.draft.clear();
        self.draft.push(point);
    }

    /// Append a vertex to the draft zone.
    pub fn extend_zone(&mut self, point: Point) {
        self.draft.push(point);
    }

    /// Finish the draft: commit it if it encloses an area, then clear it either way.
    pub fn end_zone(&mut self) -> ZoneEnd {
        let draft = std::mem::take(&mut self.draft);
        let vertices = draft.len();
        match Zone::new(draft) {
            Ok(zone) => {
                self.zones.push(zone);
                let index = self.zones.len() - 1;
                tracing::debug!(index, vertices, "zone committed");
                ZoneEnd::Committed { index }
            }
            Err(_) => {
                tracing::debug!(vertices, "zone discarded");
                ZoneEnd::Discarded { vertices }
            }
        }
    }

    /// Drop the draft zone without committing it.
    pub fn abort_zone(&mut self) {
        self.draft.clear();
    }

    /// Remove every committed zone and the draft. Captured points are kept.
    pub fn clear_zones(&mut self) {
        tracing::info!(zones = self.zones.len(), "zones cleared");
        self.zones.clear();
        self.draft.clear();
    }

    /// Reset the whole session.
    pub fn clear_all(&mut self) {
        tracing::info!(fingers = self.fingers.len(), zones = self.zones.len(), "session cleared");
        self.fingers.clear();
        self.zones.clear();
        self.draft.clear();
    }

    // --- Queries ---

    /// Points captured for `finger`, in capture order.
    #[must_use]
    pub fn points(&self, finger: Finger) -> &[Point] {
        self.fingers.get(&finger).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fingers that have at least one point, in finger order.
    pub fn fingers(&self) -> impl Iterator<Item = (Finger, &[Point])> {
        self.fingers.iter().map(|(f, pts)| (*f, pts.as_slice()))
    }

    /// Committed zones in commit order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Vertices of the zone currently being painted.
    #[must_use]
    pub fn draft_zone(&self) -> &[Point] {
        &self.draft
    }

    /// Whether a zone gesture has produced at least one vertex.
    #[must_use]
    pub fn has_draft(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Centroid, direction line and marker squares for `finger`.
    #[must_use]
    pub fn analyze(&self, finger: Finger, config: &LayoutConfig) -> FingerAnalysis {
        let points = self.points(finger);
        FingerAnalysis {
            finger,
            point_count: points.len(),
            centroid: centroid(points),
            direction: principal_axis(points),
            squares: layout_with(points, config),
        }
    }

    /// Per-finger point counts, e.g. `"Thumb: 3, Ring: 1"`, or `"None"`.
    #[must_use]
    pub fn dots_summary(&self) -> String {
        if self.fingers.is_empty() {
            return "None".to_owned();
        }
        self.fingers
            .iter()
            .map(|(f, pts)| format!("{}: {}", f.name(), pts.len()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
