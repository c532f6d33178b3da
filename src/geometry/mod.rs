//! Baluster layout geometry (pure).
//!
//! - [`layout`] counts and positions items along one axis.
//! - [`slope`] resolves the stair triangle and projects items onto the slope.
//! - [`viewport`] maps physical geometry onto a bounded pixel canvas.
//!
//! None of these functions fail or panic: degenerate input produces an empty
//! layout or a zero-sized result.

pub mod layout;
pub mod slope;
pub mod viewport;

pub use layout::{compute_layout, fit_count, used_length, LayoutResult};
pub use slope::{
    layout_triangle, project_heights, resolve_height, resolve_triangle, slope_summary,
    BalusterPlacement, EffectiveTriangle, SlopeSummary, TriangleLayout,
};
pub use viewport::{
    compute_scale, flat_viewport, to_pixels, triangle_viewport, CanvasSize, ViewportGeometry,
    FLAT_SCALE_CEILING, MIN_SCALE, PREVIEW_HEIGHT_FLAT_PX, PREVIEW_HEIGHT_TRIANGLE_PX,
    PREVIEW_MAX_WIDTH_PX,
};
