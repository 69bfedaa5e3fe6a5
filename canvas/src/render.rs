//! Rendering: draws a scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a prebuilt list of [`Primitive`]s and produces pixels; it does
//! not read or mutate session state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND, DASH_PATTERN, DRAFT_ZONE_STROKE, STROKE_WIDTH, ZONE_FILL, ZONE_STROKE};
use crate::geom::{Point, Viewport};
use crate::scene::Primitive;

/// Clear the canvas and draw `scene` in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &[Primitive], viewport: &Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    for primitive in scene {
        match primitive {
            Primitive::Zone { points } => draw_zone(ctx, points),
            Primitive::DraftZone { points } => draw_draft_zone(ctx, points)?,
            Primitive::Dot { center, radius, color } => draw_dot(ctx, *center, *radius, color)?,
            Primitive::DirectionLine { from, to, color } => draw_direction_line(ctx, *from, *to, color)?,
            Primitive::Square { corners, color, .. } => draw_square(ctx, corners, color),
        }
    }
    Ok(())
}

fn dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) -> Result<(), JsValue> {
    let segments: Array = pattern.iter().map(|&v| JsValue::from_f64(v)).collect();
    ctx.set_line_dash(&segments)
}

fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
}

fn draw_zone(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.set_fill_style_str(ZONE_FILL);
    ctx.set_stroke_style_str(ZONE_STROKE);
    ctx.set_line_width(STROKE_WIDTH);
    trace_path(ctx, points);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}

fn draw_draft_zone(ctx: &CanvasRenderingContext2d, points: &[Point]) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(DRAFT_ZONE_STROKE);
    ctx.set_line_width(STROKE_WIDTH);
    dash(ctx, &DASH_PATTERN)?;
    trace_path(ctx, points);
    ctx.stroke();
    dash(ctx, &[])
}

fn draw_dot(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_direction_line(ctx: &CanvasRenderingContext2d, from: Point, to: Point, color: &str) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(STROKE_WIDTH);
    dash(ctx, &DASH_PATTERN)?;
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
    dash(ctx, &[])
}

fn draw_square(ctx: &CanvasRenderingContext2d, corners: &[Point; 4], color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(STROKE_WIDTH);
    trace_path(ctx, corners);
    ctx.close_path();
    ctx.stroke();
}
