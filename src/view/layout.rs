//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, form, results, preview
//! and status bar, and hands each area to its panel renderer.

use crate::model::Mode;
use crate::state::{AppState, StatusMessage};
use crate::view::constants::{FORM_COLUMN_WIDTH, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::form::{form_height, render_form};
use crate::view::help::render_help_overlay;
use crate::view::preview::render_preview;
use crate::view::results::render_results;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Mode tabs.
    pub header: Rect,
    /// Input form.
    pub form: Rect,
    /// Results panel.
    pub results: Rect,
    /// Preview canvas.
    pub preview: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into panels.
///
/// Header on top, status bar at the bottom. The body puts form and results
/// in a fixed-width left column and the preview to the right.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_COLUMN_WIDTH), Constraint::Min(0)])
        .split(vertical[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height(state)), Constraint::Min(0)])
        .split(columns[0]);

    ScreenAreas {
        header: vertical[0],
        form: left[0],
        results: left[1],
        preview: columns[1],
        status: vertical[2],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &UiStyles) {
    let areas = calculate_areas(frame.area(), state);
    let calc = state.calculation();

    render_header(frame, areas.header, state, styles);
    render_form(frame, areas.form, state, styles);
    render_results(frame, areas.results, calc, state.unit_label(), styles);
    render_preview(frame, areas.preview, calc, styles);
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Render the mode tabs.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let titles: Vec<Line> = Mode::ALL
        .iter()
        .map(|mode| Line::from(mode.title()))
        .collect();
    let selected = Mode::ALL
        .iter()
        .position(|&mode| mode == state.mode())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Baluster Calculator "),
        )
        .highlight_style(styles.focused)
        .select(selected);

    frame.render_widget(tabs, area);
}

/// Keyboard hints for the current interaction state.
pub fn keyboard_hints(state: &AppState) -> &'static str {
    if state.is_editing() {
        "Enter: apply | Esc: cancel | Backspace: delete"
    } else if state.help_visible {
        "Esc/?: close help | q: quit"
    } else {
        "q: quit | m: mode | Tab: next field | Enter: edit | +/-: adjust | r: reset | ?: help"
    }
}

/// Render the status message, or keyboard hints when there is none.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let line = match &state.status {
        Some(message @ StatusMessage::Error(_)) => {
            Line::from(Span::styled(message.text().to_string(), styles.error))
        }
        Some(message) => Line::from(Span::styled(message.text().to_string(), styles.accent)),
        None => Line::from(Span::styled(keyboard_hints(state), styles.muted)),
    };

    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
