//! Full recompute over one parameter snapshot.
//!
//! Both modes are computed on every call; the preview geometry follows the
//! active mode.

use crate::geometry::{
    compute_layout, fit_count, flat_viewport, layout_triangle, triangle_viewport, LayoutResult,
    TriangleLayout, ViewportGeometry,
};
use crate::model::{Mode, ParameterError, ParameterSet};
use serde::Serialize;
use tracing::debug;

/// Largest number of balusters the shell will lay out and draw.
pub const MAX_ITEM_COUNT: usize = 10_000;

/// Results for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// Inputs this was computed from.
    pub parameters: ParameterSet,
    /// Layout along the flat rail.
    pub flat: LayoutResult,
    /// Layout and projection along the triangle.
    pub triangle: TriangleLayout,
    /// Preview geometry for the active mode.
    pub viewport: ViewportGeometry,
}

impl Calculation {
    /// Run the full pipeline.
    pub fn compute(params: &ParameterSet) -> Self {
        let flat_params = params.flat_layout();
        let flat = compute_layout(flat_params.span, flat_params.item_width, flat_params.gap);

        let triangle_params = params.triangle_layout();
        let triangle = layout_triangle(
            &params.triangle(),
            triangle_params.item_width,
            triangle_params.gap,
        );

        let viewport = match params.mode {
            Mode::Flat => flat_viewport(&flat_params, &flat),
            Mode::Triangle => triangle_viewport(&triangle_params, &triangle),
        };

        debug!(
            mode = %params.mode,
            flat_count = flat.count,
            triangle_count = triangle.layout.count,
            height_used = triangle.triangle.height_used,
            scale = viewport.scale,
            "Recomputed layout"
        );

        Self {
            parameters: *params,
            flat,
            triangle,
            viewport,
        }
    }

    /// Mode the preview was computed for.
    pub fn mode(&self) -> Mode {
        self.parameters.mode
    }

    /// Layout for the active mode.
    pub fn active_layout(&self) -> &LayoutResult {
        match self.mode() {
            Mode::Flat => &self.flat,
            Mode::Triangle => &self.triangle.layout,
        }
    }
}

/// Reject parameter sets whose layouts would exceed [`MAX_ITEM_COUNT`].
///
/// Checked before [`Calculation::compute`] so no positions are allocated for
/// an unreasonable count.
pub fn check_item_bound(params: &ParameterSet) -> Result<(), ParameterError> {
    let flat = params.flat_layout();
    let triangle = params.triangle_layout();
    let count = fit_count(flat.span, flat.item_width, flat.gap).max(fit_count(
        triangle.span,
        triangle.item_width,
        triangle.gap,
    ));

    if count > MAX_ITEM_COUNT {
        return Err(ParameterError::TooManyItems {
            count,
            limit: MAX_ITEM_COUNT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterField;

    #[test]
    fn default_parameters_compute_both_modes() {
        let calc = Calculation::compute(&ParameterSet::default());
        assert_eq!(calc.flat.count, 15);
        assert_eq!(calc.triangle.layout.count, 15);
        assert_eq!(calc.triangle.placements.len(), 15);
        assert_eq!(calc.mode(), Mode::Flat);
    }

    #[test]
    fn viewport_follows_active_mode() {
        let flat = Calculation::compute(&ParameterSet::default());
        assert_eq!(flat.viewport.scale, 3.0);
        assert!(flat.viewport.item_heights_px.is_empty());

        let triangle = Calculation::compute(&ParameterSet::default().with_mode(Mode::Triangle));
        assert_eq!(triangle.viewport.scale, 1.5);
        assert_eq!(triangle.viewport.item_heights_px.len(), 15);
    }

    #[test]
    fn active_layout_switches_with_mode() {
        let params = ParameterSet::default()
            .with_value(ParameterField::RailLength, 30.0)
            .with_value(ParameterField::TriangleBase, 300.0);

        let flat = Calculation::compute(&params);
        assert_eq!(flat.active_layout().count, flat.flat.count);

        let triangle = Calculation::compute(&params.with_mode(Mode::Triangle));
        assert_eq!(triangle.active_layout().count, triangle.triangle.layout.count);
        assert_ne!(flat.active_layout().count, triangle.active_layout().count);
    }

    #[test]
    fn item_bound_accepts_defaults() {
        assert_eq!(check_item_bound(&ParameterSet::default()), Ok(()));
    }

    #[test]
    fn item_bound_rejects_huge_rails() {
        let params = ParameterSet::default().with_value(ParameterField::RailLength, 1.0e9);
        let err = check_item_bound(&params).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::TooManyItems {
                limit: MAX_ITEM_COUNT,
                ..
            }
        ));
    }

    #[test]
    fn item_bound_checks_the_inactive_mode_too() {
        let params = ParameterSet::default().with_value(ParameterField::TriangleBase, 1.0e9);
        assert!(check_item_bound(&params).is_err());
    }
}
