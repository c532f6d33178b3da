//! Results panel: counts, lengths, and the triangle placement table.

use crate::calculation::Calculation;
use crate::model::Mode;
use crate::report::height_source_note;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

/// Summary lines for the active mode.
pub fn summary_lines(calc: &Calculation, unit: &str) -> Vec<Line<'static>> {
    match calc.mode() {
        Mode::Flat => vec![
            Line::from(format!("Balusters that fit: {}", calc.flat.count)),
            Line::from(format!("Used length: {:.2} {unit}", calc.flat.used_length)),
            Line::from(format!("Remaining: {:.2} {unit}", calc.flat.remaining_length)),
        ],
        Mode::Triangle => {
            let triangle = &calc.triangle;
            let mut height = format!("Using height: {:.2} {unit}", triangle.triangle.height_used);
            if let Some(note) = height_source_note(calc) {
                height.push(' ');
                height.push_str(&note);
            }
            vec![
                Line::from(format!("Balusters that fit: {}", triangle.layout.count)),
                Line::from(height),
                Line::from(format!(
                    "Slope angle: {:.2}°",
                    triangle.summary.angle_degrees
                )),
                Line::from(format!(
                    "Hypotenuse: {:.2} {unit}",
                    triangle.summary.hypotenuse_length
                )),
            ]
        }
    }
}

/// Rows of the placement table that fit in `height` lines, header included,
/// and how many are left over. One line is kept for the overflow footer when
/// rows are cut.
fn table_rows_fit(total: usize, height: u16) -> (usize, usize) {
    let body = usize::from(height.saturating_sub(1));
    if total <= body {
        return (total, 0);
    }
    let shown = body.saturating_sub(1);
    (shown, total - shown)
}

/// Render the results for the active mode.
///
/// Triangle mode adds one table row per baluster below the summary. When the
/// panel is too short, the last line says how many rows are hidden.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    calc: &Calculation,
    unit: &str,
    styles: &UiStyles,
) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(styles.accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = summary_lines(calc, unit);
    let placements = &calc.triangle.placements;
    let show_table = calc.mode() == Mode::Triangle && !placements.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.len() as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(summary), chunks[0]);

    if !show_table {
        return;
    }

    let header = Row::new(vec![
        "#".to_string(),
        format!("X ({unit})"),
        format!("Height ({unit})"),
    ])
    .style(styles.header);

    let (shown, hidden) = table_rows_fit(placements.len(), chunks[1].height);
    let (table_area, footer_area) = if hidden > 0 {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(chunks[1]);
        (split[0], Some(split[1]))
    } else {
        (chunks[1], None)
    };

    let rows = placements.iter().take(shown).map(|placement| {
        Row::new(vec![
            placement.index.to_string(),
            format!("{:.2}", placement.x),
            format!("{:.2}", placement.height),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, table_area);

    if let Some(footer_area) = footer_area {
        let footer = Line::from(format!("+{hidden} more rows, run with --print to list all"))
            .style(styles.muted);
        frame.render_widget(Paragraph::new(footer), footer_area);
    }
}
