//! Finger trace canvas: geometry engine, session state and drawing backend.
//!
//! Points are captured per finger on a drawing surface. For each finger the
//! engine derives a centroid, a principal-direction line and three oriented
//! marker squares. Painted exclusion zones suppress capture of points that
//! fall inside them. The geometry modules are pure; the session and engine
//! layers hold state; only [`render`] and [`engine::Engine`] touch the browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`analysis`] | Centroid and principal axis of a point set |
//! | [`zone`] | Exclusion zones and ray-casting containment |
//! | [`markers`] | Oriented marker square layout |
//! | [`geom`] | `Point` and viewport coordinate conversions |
//! | [`config`] | Layout sizes with validation |
//! | [`session`] | Fingers, captured points and zone lifecycle |
//! | [`input`] | Interaction mode and gesture state machine |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Renderer-agnostic drawing primitives |
//! | [`render`] | Draws a scene to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants and colours |

pub mod analysis;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod markers;
pub mod render;
pub mod scene;
pub mod session;
pub mod zone;
