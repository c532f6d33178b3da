//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::UiStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups shown in the overlay: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Mode",
        &[
            ("m", "Toggle flat rail / triangle stair"),
            ("f", "Flat rail"),
            ("t", "Triangle stair"),
        ],
    ),
    (
        "Fields",
        &[
            ("Tab/j/↓", "Next field"),
            ("Shift+Tab/k/↑", "Previous field"),
            ("+/=/→", "Increase by step"),
            ("-/←", "Decrease by step"),
            ("r", "Reset to defaults"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter/e", "Type a new value"),
            ("Enter", "Apply typed value"),
            ("Esc", "Cancel typing"),
            ("Backspace", "Delete last character"),
        ],
    ),
    (
        "Application",
        &[("q/Ctrl+c", "Quit"), ("?", "Show help overlay")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &UiStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &UiStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, styles.header)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), styles.key),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(70, 80, area);
        assert_eq!(popup, Rect::new(15, 5, 70, 40));
    }

    #[test]
    fn centered_rect_handles_tiny_area() {
        let area = Rect::new(0, 0, 1, 1);
        let popup = centered_rect(70, 80, area);
        assert_eq!(popup.width, 0);
        assert_eq!(popup.height, 0);
    }

    #[test]
    fn help_content_lists_every_category() {
        let lines = build_help_content(&UiStyles::default());
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        for (category, _) in SHORTCUTS {
            assert!(text.iter().any(|line| line == category), "missing {category}");
        }
        assert!(text.iter().any(|line| line.contains("Reset to defaults")));
    }
}
