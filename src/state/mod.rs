//! UI state machine (pure).
//!
//! All state transitions are plain methods testable without a terminal.

pub mod app_state;
pub mod form;

// Re-export for convenience
pub use app_state::{AppState, StatusMessage};
pub use form::{fields_for, parse_field_value, EditBuffer};
