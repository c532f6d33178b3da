//! Scaled schematic of the active layout, drawn on a ratatui canvas.
//!
//! Canvas coordinates are the pixel geometry from the viewport scaler with
//! the origin at the bottom left, so balusters grow upward.

use crate::calculation::Calculation;
use crate::model::Mode;
use crate::view::constants::PREVIEW_FOOTNOTE_HEIGHT;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Bottom edge of the flat rail bar.
pub const RAIL_BOTTOM_PX: f64 = 40.0;

/// Thickness of the flat rail bar.
pub const RAIL_THICKNESS_PX: f64 = 8.0;

/// Bottom edge of flat-mode balusters.
pub const FLAT_BALUSTER_BOTTOM_PX: f64 = 12.0;

/// Drawn height of flat-mode balusters.
pub const FLAT_BALUSTER_HEIGHT_PX: f64 = 60.0;

/// One primitive of the preview drawing, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewShape {
    /// Axis-aligned box.
    Bar {
        /// Left edge.
        x: f64,
        /// Bottom edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Straight segment.
    Segment {
        /// Start x.
        x1: f64,
        /// Start y.
        y1: f64,
        /// End x.
        x2: f64,
        /// End y.
        y2: f64,
    },
}

/// Shapes for the active mode, guides first.
pub fn preview_shapes(calc: &Calculation) -> Vec<PreviewShape> {
    let viewport = &calc.viewport;
    let mut shapes = Vec::with_capacity(viewport.item_positions_px.len() + 1);

    match calc.mode() {
        Mode::Flat => {
            shapes.push(PreviewShape::Bar {
                x: 0.0,
                y: RAIL_BOTTOM_PX,
                width: viewport.canvas_width_px,
                height: RAIL_THICKNESS_PX,
            });
            shapes.extend(viewport.item_positions_px.iter().map(|&x| PreviewShape::Bar {
                x,
                y: FLAT_BALUSTER_BOTTOM_PX,
                width: viewport.item_width_px,
                height: FLAT_BALUSTER_HEIGHT_PX,
            }));
        }
        Mode::Triangle => {
            let angle = calc.triangle.summary.angle_radians;
            shapes.push(PreviewShape::Segment {
                x1: 0.0,
                y1: 0.0,
                x2: viewport.hypotenuse_px * angle.cos(),
                y2: viewport.hypotenuse_px * angle.sin(),
            });
            shapes.extend(
                viewport
                    .item_positions_px
                    .iter()
                    .zip(&viewport.item_heights_px)
                    .map(|(&x, &height)| PreviewShape::Bar {
                        x,
                        y: 0.0,
                        width: viewport.item_width_px,
                        height,
                    }),
            );
        }
    }

    shapes
}

/// Text shown under the canvas.
pub fn footnote(calc: &Calculation) -> String {
    match calc.mode() {
        Mode::Flat => "Preview scaled to fit (not true size)".to_string(),
        Mode::Triangle => format!(
            "Preview scaled to fit (not true size). Angle: {:.2}°",
            calc.triangle.summary.angle_degrees
        ),
    }
}

/// Render the preview panel.
pub fn render_preview(frame: &mut Frame, area: Rect, calc: &Calculation, styles: &UiStyles) {
    let title = match calc.mode() {
        Mode::Flat => " Visual Preview ",
        Mode::Triangle => " Stylized Slope Preview ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles.accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PREVIEW_FOOTNOTE_HEIGHT),
        ])
        .split(inner);

    let viewport = &calc.viewport;
    let shapes = preview_shapes(calc);
    let guide = styles.guide;
    let drawing = styles.drawing;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.canvas_width_px.max(1.0)])
        .y_bounds([0.0, viewport.canvas_height_px.max(1.0)])
        .paint(move |ctx| {
            for (index, shape) in shapes.iter().enumerate() {
                let color = if index == 0 { guide } else { drawing };
                paint_shape(ctx, *shape, color);
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let note = Paragraph::new(Line::from(Span::styled(footnote(calc), styles.muted)));
    frame.render_widget(note, chunks[1]);
}

fn paint_shape(ctx: &mut ratatui::widgets::canvas::Context<'_>, shape: PreviewShape, color: Color) {
    match shape {
        PreviewShape::Bar {
            x,
            y,
            width,
            height,
        } => ctx.draw(&Rectangle {
            x,
            y,
            width,
            height,
            color,
        }),
        PreviewShape::Segment { x1, y1, x2, y2 } => ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        }),
    }
}
