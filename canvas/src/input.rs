//! Input model: interaction mode, persistent UI state, and the gesture state machine.
//!
//! `Mode` decides what a press means: in touch mode it records a point for
//! the selected finger, in paint mode it starts an exclusion zone. `UiState`
//! holds the choices the toolbar makes. `InputState` tracks the gesture in
//! progress between press and release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::session::Finger;

/// What a pointer press on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Presses record points for the selected finger (default).
    #[default]
    Touch,
    /// Presses and drags paint an exclusion zone.
    Paint,
}

impl Mode {
    /// Label shown in the status bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Touch => "Touch Mode",
            Self::Paint => "Paint Zone",
        }
    }

    /// CSS cursor for the canvas element in this mode.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Touch => "pointer",
            Self::Paint => "crosshair",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Touch => Self::Paint,
            Self::Paint => Self::Touch,
        }
    }
}

/// Persistent UI state visible to the renderer and the status bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Finger that receives captured points, and whose touch is tracked.
    pub finger: Finger,
    /// Current interaction mode.
    pub mode: Mode,
}

/// Gesture in progress between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A zone is being painted; moves extend the session's draft zone.
    PaintingZone,
}

impl InputState {
    #[must_use]
    pub fn is_painting(self) -> bool {
        matches!(self, Self::PaintingZone)
    }
}
