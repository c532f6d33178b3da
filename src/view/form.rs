//! Input form panel.

use crate::model::{Mode, ParameterField};
use crate::state::form::{format_value, has_length_unit, label};
use crate::state::AppState;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Column at which values start, counted from the inner left edge.
const VALUE_COLUMN: usize = 34;

/// Lines the form needs for the current mode, borders included.
pub fn form_height(state: &AppState) -> u16 {
    let hint = u16::from(state.mode() == Mode::Triangle);
    state.fields().len() as u16 + hint + 2
}

/// Render the fields of the active mode.
///
/// The focused field is marked with `>`. While editing, the typed text is
/// shown in place of the value, followed by a cursor.
pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let mut lines: Vec<Line> = state
        .fields()
        .iter()
        .enumerate()
        .map(|(index, &field)| field_line(state, index, field, styles))
        .collect();

    if state.mode() == Mode::Triangle {
        lines.push(Line::from(Span::styled(
            "  Angle > 0 sets height = base × tan(angle)",
            styles.muted,
        )));
    }

    let block = Block::default()
        .title(" Inputs ")
        .borders(Borders::ALL)
        .border_style(styles.accent);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(
    state: &AppState,
    index: usize,
    field: ParameterField,
    styles: &UiStyles,
) -> Line<'static> {
    let focused = index == state.focused_index();
    let marker = if focused { "> " } else { "  " };
    let caption = field_caption(field, state.unit_label());
    let padded = format!("{marker}{caption:<width$}", width = VALUE_COLUMN - 2);

    let label_style = if focused {
        styles.focused
    } else {
        ratatui::style::Style::default()
    };

    let value = match state.edit_buffer() {
        Some(edit) if focused => Span::styled(format!("{}_", edit.text()), styles.editing),
        _ => Span::styled(format_value(state.params().get(field)), label_style),
    };

    Line::from(vec![Span::styled(padded, label_style), value])
}

/// Label with its unit suffix, e.g. `Rail Length (cm)`.
pub fn field_caption(field: ParameterField, unit: &str) -> String {
    if has_length_unit(field) {
        format!("{} ({unit})", label(field))
    } else {
        label(field).to_string()
    }
}
