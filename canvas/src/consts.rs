//! Shared numeric constants for the canvas crate.

// ── Analysis ────────────────────────────────────────────────────

/// Distance from the centroid to each endpoint of a direction line, in canvas units.
///
/// Long enough to cross any realistic canvas; callers wanting exact clipping
/// intersect with the canvas bounds themselves.
pub const DIRECTION_LINE_HALF_LENGTH: f64 = 1000.0;

// ── Markers ─────────────────────────────────────────────────────

/// Number of marker squares laid out per finger.
pub const MARKER_COUNT: usize = 3;

/// Default marker square side length in canvas units.
pub const DEFAULT_SQUARE_SIZE: f64 = 80.0;

/// Default gap between adjacent marker squares.
pub const DEFAULT_SQUARE_GAP: f64 = 10.0;

/// Default diameter of a captured-point dot.
pub const DEFAULT_DOT_SIZE: f64 = 12.0;

// ── Zones ───────────────────────────────────────────────────────

/// Fewest vertices a polygon needs to enclose an area.
pub const MIN_ZONE_VERTICES: usize = 3;

// ── Styling ─────────────────────────────────────────────────────

/// Stroke width for direction lines, marker squares and zone outlines.
pub const STROKE_WIDTH: f64 = 2.0;

/// Dash pattern (on, off) for direction lines and the in-progress zone outline.
pub const DASH_PATTERN: [f64; 2] = [5.0, 5.0];

/// Canvas background colour.
pub const BACKGROUND: &str = "#ffffff";

/// Committed zone fill.
pub const ZONE_FILL: &str = "rgba(128, 128, 128, 0.5)";

/// Committed zone outline.
pub const ZONE_STROKE: &str = "#666666";

/// In-progress zone outline.
pub const DRAFT_ZONE_STROKE: &str = "#999999";
