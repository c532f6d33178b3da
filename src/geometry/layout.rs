//! One-dimensional fence-post layout.
//!
//! `n` items of width `w` with `n - 1` gaps of width `g` fit in a span `s`
//! iff `n*w + (n-1)*g <= s`, i.e. `n <= (s + g) / (w + g)`. Positions are
//! left aligned at the origin; centering is a viewport concern.

use serde::Serialize;

/// Count and positions of items laid out along one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Number of items that fit.
    pub count: usize,
    /// Start offset of each item, strictly increasing by `item_width + gap`.
    pub positions: Vec<f64>,
    /// `count * item_width + max(0, count - 1) * gap`.
    pub used_length: f64,
    /// `max(0, span - used_length)`.
    pub remaining_length: f64,
}

impl LayoutResult {
    /// Layout with no items.
    pub fn empty(span: f64) -> Self {
        Self {
            count: 0,
            positions: Vec::new(),
            used_length: 0.0,
            remaining_length: span.max(0.0),
        }
    }

    /// Whether nothing fit.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Number of items that fit in `span`.
///
/// Returns 0 when the step `item_width + gap` is not positive or when any
/// intermediate value is not finite.
pub fn fit_count(span: f64, item_width: f64, gap: f64) -> usize {
    let step = item_width + gap;
    if !(step > 0.0 && step.is_finite()) {
        return 0;
    }

    let fit = ((span + gap) / step).floor();
    if !(fit >= 0.0 && fit.is_finite()) {
        return 0;
    }

    fit as usize
}

/// Total length covered by `count` items and the gaps between them.
pub fn used_length(count: usize, item_width: f64, gap: f64) -> f64 {
    let items = count as f64;
    let gaps = count.saturating_sub(1) as f64;
    items * item_width + gaps * gap
}

/// Lay out as many items as fit in `span`.
pub fn compute_layout(span: f64, item_width: f64, gap: f64) -> LayoutResult {
    let count = fit_count(span, item_width, gap);
    if count == 0 {
        return LayoutResult::empty(span);
    }

    let step = item_width + gap;
    let positions = (0..count).map(|i| i as f64 * step).collect();
    let used_length = used_length(count, item_width, gap);

    LayoutResult {
        count,
        positions,
        used_length,
        remaining_length: (span - used_length).max(0.0),
    }
}
