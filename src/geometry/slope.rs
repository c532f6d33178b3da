//! Projection of a base-axis layout onto a straight stair slope.
//!
//! The slope runs from `(0, 0)` to `(base, height_used)`. Each item placed
//! along the base rises in proportion to its offset.

use crate::geometry::layout::{compute_layout, LayoutResult};
use crate::model::TriangleParameters;
use serde::Serialize;

/// Triangle dimensions after the angle/height precedence rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveTriangle {
    /// Horizontal run.
    pub base: f64,
    /// Rise actually used for projection.
    pub height_used: f64,
    /// Slope angle in degrees: the supplied angle, or one derived from the rise.
    pub angle_used_degrees: f64,
    /// `true` when `height_used` was computed from a supplied angle.
    pub height_from_angle: bool,
}

/// One baluster on the slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalusterPlacement {
    /// 1-based position in the run.
    pub index: usize,
    /// Offset along the base.
    pub x: f64,
    /// Rise of the slope at `x`.
    pub height: f64,
}

/// Descriptive slope figures for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlopeSummary {
    /// `atan2(height_used, base)`.
    pub angle_radians: f64,
    /// Same angle in degrees.
    pub angle_degrees: f64,
    /// Length of the hypotenuse.
    pub hypotenuse_length: f64,
}

/// Everything computed for the triangle mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleLayout {
    /// Resolved dimensions.
    pub triangle: EffectiveTriangle,
    /// Layout along the base.
    pub layout: LayoutResult,
    /// One placement per laid out item.
    pub placements: Vec<BalusterPlacement>,
    /// Angle and hypotenuse.
    pub summary: SlopeSummary,
}

/// Rise of the triangle: `base * tan(angle)` when the angle is positive,
/// otherwise the manual height.
pub fn resolve_height(base: f64, height: f64, angle_degrees: f64) -> f64 {
    if angle_degrees > 0.0 {
        base * angle_degrees.to_radians().tan()
    } else {
        height
    }
}

/// Apply the angle/height precedence rule.
pub fn resolve_triangle(params: &TriangleParameters) -> EffectiveTriangle {
    let height_used = resolve_height(params.base, params.height, params.angle_degrees);
    let height_from_angle = params.angle_degrees > 0.0;
    let angle_used_degrees = if height_from_angle {
        params.angle_degrees
    } else {
        slope_summary(params.base, height_used).angle_degrees
    };

    EffectiveTriangle {
        base: params.base,
        height_used,
        angle_used_degrees,
        height_from_angle,
    }
}

/// Rise at each position along the base.
///
/// A zero base yields flat (zero height) placements.
pub fn project_heights(positions: &[f64], base: f64, height_used: f64) -> Vec<BalusterPlacement> {
    let rise_per_unit = if base != 0.0 { height_used / base } else { 0.0 };

    positions
        .iter()
        .enumerate()
        .map(|(i, &x)| BalusterPlacement {
            index: i + 1,
            x,
            height: rise_per_unit * x,
        })
        .collect()
}

/// Angle and hypotenuse of the slope.
pub fn slope_summary(base: f64, height_used: f64) -> SlopeSummary {
    let angle_radians = height_used.atan2(base);
    SlopeSummary {
        angle_radians,
        angle_degrees: angle_radians.to_degrees(),
        hypotenuse_length: base.hypot(height_used),
    }
}

/// Lay out items along the triangle base and project them onto the slope.
pub fn layout_triangle(params: &TriangleParameters, item_width: f64, gap: f64) -> TriangleLayout {
    let triangle = resolve_triangle(params);
    let layout = compute_layout(triangle.base, item_width, gap);
    let placements = project_heights(&layout.positions, triangle.base, triangle.height_used);
    let summary = slope_summary(triangle.base, triangle.height_used);

    TriangleLayout {
        triangle,
        layout,
        placements,
        summary,
    }
}
