#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space (CSS pixels, origin at the canvas top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `distance` along the direction `angle_rad`.
    #[must_use]
    pub fn along(self, angle_rad: f64, distance: f64) -> Self {
        Self {
            x: self.x + angle_rad.cos() * distance,
            y: self.y + angle_rad.sin() * distance,
        }
    }
}

/// Placement of the drawing surface inside the host page.
///
/// `left` / `top` are the canvas bounding rect origin in client coordinates.
/// `width` / `height` are in CSS pixels. `dpr` is the device pixel ratio used
/// to size the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { left: 0.0, top: 0.0, width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Convert a client-space point (e.g. `MouseEvent.clientX/Y`) to canvas space.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point {
            x: client.x - self.left,
            y: client.y - self.top,
        }
    }

    /// Backing-store size in device pixels, rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).max(0.0).floor() as u32;
        let h = (self.height * self.dpr).max(0.0).floor() as u32;
        (w, h)
    }
}
