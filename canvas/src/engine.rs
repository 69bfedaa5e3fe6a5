use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::LayoutConfig;
use crate::geom::{Point, Viewport};
use crate::input::{InputState, Mode, UiState};
use crate::render;
use crate::scene::{self, Primitive};
use crate::session::{Capture, Finger, FingerAnalysis, SessionStore, ZoneEnd};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PointCaptured { finger: Finger, point: Point },
    PointSuppressed { point: Point },
    ZoneCommitted { index: usize },
    ZoneDiscarded { vertices: usize },
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub session: SessionStore,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub config: LayoutConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using `config` for marker and dot sizes.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Viewport ---

    /// Update the canvas placement and device pixel ratio.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<Action> {
        self.viewport = viewport;
        vec![Action::RenderNeeded]
    }

    // --- Toolbar ---

    /// Select the finger that receives points. Ignored while painting zones.
    pub fn select_finger(&mut self, finger: Finger) -> Vec<Action> {
        if self.ui.mode == Mode::Paint || self.ui.finger == finger {
            return Vec::new();
        }
        self.ui.finger = finger;
        vec![Action::RenderNeeded]
    }

    /// Switch between touch and paint mode, abandoning any zone in progress.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if self.ui.mode == mode {
            return Vec::new();
        }
        self.ui.mode = mode;
        self.abandon_gesture();
        vec![Action::SetCursor(mode.cursor()), Action::RenderNeeded]
    }

    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.set_mode(self.ui.mode.toggled())
    }

    /// Remove committed zones and any zone in progress.
    pub fn clear_zones(&mut self) -> Vec<Action> {
        self.session.clear_zones();
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    /// Remove every point and zone.
    pub fn clear_all(&mut self) -> Vec<Action> {
        self.session.clear_all();
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Pointer input (client coordinates) ---

    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client_pt);
        match self.ui.mode {
            Mode::Paint => {
                self.session.begin_zone(pt);
                self.input = InputState::PaintingZone;
                vec![Action::RenderNeeded]
            }
            Mode::Touch => match self.session.capture(self.ui.finger, pt) {
                Capture::Admitted => vec![
                    Action::PointCaptured { finger: self.ui.finger, point: pt },
                    Action::RenderNeeded,
                ],
                Capture::Suppressed => vec![Action::PointSuppressed { point: pt }],
            },
        }
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        if self.ui.mode != Mode::Paint || !self.input.is_painting() {
            return Vec::new();
        }
        let pt = self.viewport.client_to_canvas(client_pt);
        self.session.extend_zone(pt);
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let was_painting = self.input.is_painting();
        self.input = InputState::Idle;
        if !was_painting {
            return Vec::new();
        }
        match self.session.end_zone() {
            ZoneEnd::Committed { index } => vec![Action::ZoneCommitted { index }, Action::RenderNeeded],
            ZoneEnd::Discarded { vertices } => vec![Action::ZoneDiscarded { vertices }, Action::RenderNeeded],
        }
    }

    // --- Touch input (client coordinates, in `TouchEvent.touches` order) ---

    /// Only the touch whose list position matches the selected finger's index is tracked.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match self.tracked_touch(touches) {
            Some(pt) => self.on_pointer_down(pt),
            None => Vec::new(),
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match self.tracked_touch(touches) {
            Some(pt) => self.on_pointer_move(pt),
            None => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    fn tracked_touch(&self, touches: &[Point]) -> Option<Point> {
        touches.get(self.ui.finger.index()).copied()
    }

    fn abandon_gesture(&mut self) {
        if self.input.is_painting() {
            self.session.abort_zone();
        }
        self.input = InputState::Idle;
    }

    // --- Queries ---

    /// Drawing primitives for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<Primitive> {
        scene::build(&self.session, &self.config)
    }

    /// Derived geometry for one finger.
    #[must_use]
    pub fn analysis(&self, finger: Finger) -> FingerAnalysis {
        self.session.analyze(finger, &self.config)
    }

    /// Status bar text, e.g. `Mode: Touch Mode • Selected: Thumb finger • Dots: None • Zones: 0`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Mode: {} • Selected: {} finger • Dots: {} • Zones: {}",
            self.ui.mode.label(),
            self.ui.finger.name(),
            self.session.dots_summary(),
            self.session.zones().len(),
        )
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: LayoutConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Viewport ---

    /// Resize the backing store to `viewport` at its device pixel ratio and
    /// pin the CSS size so the canvas is not stretched.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element's style cannot be updated.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<Vec<Action>, JsValue> {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        Ok(self.core.set_viewport(viewport))
    }

    // --- Delegated toolbar ---

    pub fn select_finger(&mut self, finger: Finger) -> Vec<Action> {
        self.core.select_finger(finger)
    }

    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.core.toggle_mode()
    }

    pub fn clear_zones(&mut self) -> Vec<Action> {
        self.core.clear_zones()
    }

    pub fn clear_all(&mut self) -> Vec<Action> {
        self.core.clear_all()
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(client_pt)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(client_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        self.core.on_touch_start(touches)
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        self.core.on_touch_move(touches)
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.core.on_touch_end()
    }

    // --- Host effects ---

    /// Apply a `SetCursor` action to the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element's style cannot be updated.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), JsValue> {
        self.canvas.style().set_property("cursor", cursor)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core.scene(), &self.core.viewport)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn status_line(&self) -> String {
        self.core.status_line()
    }

    #[must_use]
    pub fn analysis(&self, finger: Finger) -> FingerAnalysis {
        self.core.analysis(finger)
    }
}
