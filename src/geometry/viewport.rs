//! Physical-to-pixel mapping for the preview canvas.
//!
//! A single scale factor maps every physical length to pixels so the
//! preview keeps true proportions inside a bounded canvas. Pixel sizes are
//! rounded to whole pixels, items are never narrower than one pixel, and the
//! row of items is centered horizontally.

use crate::geometry::layout::LayoutResult;
use crate::geometry::slope::TriangleLayout;
use crate::model::{LayoutParameters, Mode};
use serde::Serialize;

/// Maximum preview width in pixels.
pub const PREVIEW_MAX_WIDTH_PX: f64 = 760.0;

/// Preview height for the flat rail, in pixels.
pub const PREVIEW_HEIGHT_FLAT_PX: f64 = 80.0;

/// Preview height for the triangle, in pixels.
pub const PREVIEW_HEIGHT_TRIANGLE_PX: f64 = 120.0;

/// Upper bound on pixels per unit for flat rails, so short rails are not
/// magnified absurdly.
pub const FLAT_SCALE_CEILING: f64 = 3.0;

/// Scale used when the physical extent overflows to infinity.
pub const MIN_SCALE: f64 = f64::MIN_POSITIVE;

/// Pixel dimensions of a preview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width_px: f64,
    /// Height in pixels.
    pub height_px: f64,
}

impl CanvasSize {
    /// Canvas of the given pixel size.
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Pixel-space geometry handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportGeometry {
    /// Pixels per physical unit.
    pub scale: f64,
    /// Canvas width in pixels.
    pub canvas_width_px: f64,
    /// Canvas height in pixels.
    pub canvas_height_px: f64,
    /// Item width in pixels, at least 1.
    pub item_width_px: f64,
    /// Gap between items in pixels.
    pub gap_px: f64,
    /// Empty space left of the first item (and right of the last).
    pub end_gap_px: f64,
    /// Left edge of each item in pixels, centering included.
    pub item_positions_px: Vec<f64>,
    /// Rise of each item in pixels. Empty for flat rails.
    pub item_heights_px: Vec<f64>,
    /// Hypotenuse length in pixels. Zero for flat rails.
    pub hypotenuse_px: f64,
}

/// Pixels per unit that keep the physical extent inside the canvas bounds.
///
/// Flat rails are fitted by width and capped at [`FLAT_SCALE_CEILING`].
/// Triangles are fitted on both axes with the same factor, so the smaller
/// ratio wins. The result is always positive and finite: an infinite extent
/// falls back to [`MIN_SCALE`].
pub fn compute_scale(
    mode: Mode,
    span: f64,
    height_used: f64,
    max_width_px: f64,
    max_height_px: f64,
) -> f64 {
    let width_ratio = max_width_px / span.max(1.0);
    let scale = match mode {
        Mode::Flat => FLAT_SCALE_CEILING.min(width_ratio),
        Mode::Triangle => width_ratio.min(max_height_px / height_used.max(1.0)),
    };

    if scale > 0.0 && scale.is_finite() {
        scale
    } else {
        MIN_SCALE
    }
}

/// Round to whole pixels; overflowed values collapse to 0.
fn whole_px(value: f64) -> f64 {
    let px = value.round();
    if px.is_finite() {
        px
    } else {
        0.0
    }
}

/// Scale a physical layout and center it in `canvas`.
pub fn to_pixels(
    params: &LayoutParameters,
    layout: &LayoutResult,
    scale: f64,
    canvas: CanvasSize,
) -> ViewportGeometry {
    let item_width_px = whole_px(params.item_width * scale).max(1.0);
    let gap_px = whole_px(params.gap * scale);

    let count = layout.count as f64;
    let gaps = layout.count.saturating_sub(1) as f64;
    let total_width_px = count * item_width_px + gaps * gap_px;
    let end_gap_px = ((canvas.width_px - total_width_px) / 2.0).max(0.0);

    let step_px = item_width_px + gap_px;
    let item_positions_px = (0..layout.count)
        .map(|i| end_gap_px + i as f64 * step_px)
        .collect();

    ViewportGeometry {
        scale,
        canvas_width_px: canvas.width_px,
        canvas_height_px: canvas.height_px,
        item_width_px,
        gap_px,
        end_gap_px,
        item_positions_px,
        item_heights_px: Vec::new(),
        hypotenuse_px: 0.0,
    }
}

/// Preview geometry for a flat rail.
pub fn flat_viewport(params: &LayoutParameters, layout: &LayoutResult) -> ViewportGeometry {
    let scale = compute_scale(
        Mode::Flat,
        params.span,
        0.0,
        PREVIEW_MAX_WIDTH_PX,
        PREVIEW_HEIGHT_FLAT_PX,
    );
    let canvas = CanvasSize::new(whole_px(params.span * scale), PREVIEW_HEIGHT_FLAT_PX);
    to_pixels(params, layout, scale, canvas)
}

/// Preview geometry for a triangle; `params.span` is the triangle base.
pub fn triangle_viewport(params: &LayoutParameters, triangle: &TriangleLayout) -> ViewportGeometry {
    let scale = compute_scale(
        Mode::Triangle,
        params.span,
        triangle.triangle.height_used,
        PREVIEW_MAX_WIDTH_PX,
        PREVIEW_HEIGHT_TRIANGLE_PX,
    );
    let canvas = CanvasSize::new(whole_px(params.span * scale), PREVIEW_HEIGHT_TRIANGLE_PX);

    let mut geometry = to_pixels(params, &triangle.layout, scale, canvas);
    geometry.item_heights_px = triangle
        .placements
        .iter()
        .map(|placement| whole_px(placement.height * scale))
        .collect();
    let hypotenuse_px = triangle.summary.hypotenuse_length * scale;
    geometry.hypotenuse_px = if hypotenuse_px.is_finite() {
        hypotenuse_px
    } else {
        0.0
    };
    geometry
}
