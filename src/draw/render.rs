//! Cairo-based rendering routines for the drawing tools.

use super::color::Color;

/// Strokes a straight segment between two points.
///
/// Serves both the pen tool (incremental segment from the last sampled
/// point) and the line tool (full segment from the gesture start).
pub fn stroke_segment(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    width: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    let _ = ctx.stroke();
}

/// Draws a filled, stroked rectangle.
///
/// Expects normalized bounds (non-negative extent); fill goes first so the
/// stroke keeps its full configured width on top.
pub fn draw_rect(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    stroke: Color,
    fill: Color,
    width: f64,
) {
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(x as f64, y as f64, w as f64, h as f64);

    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.fill_preserve();

    ctx.set_source_rgba(stroke.r, stroke.g, stroke.b, stroke.a);
    let _ = ctx.stroke();
}

/// Draws a filled, stroked circle centered at (cx, cy).
///
/// A zero radius is a degenerate point; the arc collapses and only the
/// stroke's round caps leave a mark.
pub fn draw_circle(
    ctx: &cairo::Context,
    cx: i32,
    cy: i32,
    radius: f64,
    stroke: Color,
    fill: Color,
    width: f64,
) {
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.arc(cx as f64, cy as f64, radius, 0.0, 2.0 * std::f64::consts::PI);

    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.fill_preserve();

    ctx.set_source_rgba(stroke.r, stroke.g, stroke.b, stroke.a);
    let _ = ctx.stroke();
}
