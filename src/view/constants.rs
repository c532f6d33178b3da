//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the mode tab bar in lines (border + content).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the left column holding the form and the results.
pub const FORM_COLUMN_WIDTH: u16 = 56;

/// Lines below the preview canvas reserved for the footnote.
pub const PREVIEW_FOOTNOTE_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
