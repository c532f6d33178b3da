//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Every change to
//! the parameters goes through [`AppState::replace_params`], which recomputes
//! the whole [`Calculation`] from the new snapshot.

use crate::calculation::{check_item_bound, Calculation};
use crate::model::{Mode, ParameterError, ParameterField, ParameterSet};
use crate::state::form::{fields_for, step, EditBuffer};
use tracing::{debug, warn};

// ===== StatusMessage =====

/// One line of feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Neutral confirmation.
    Info(String),
    /// A rejected input.
    Error(String),
}

impl StatusMessage {
    /// Message text.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    /// Whether this reports a rejected input.
    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Mode**: Flat ⇄ Triangle (via `set_mode`, `toggle_mode`); switching
///   resets focus to the first field and drops any edit in progress.
/// - **Edit**: Browsing → Editing → Browsing (via `begin_edit`, then
///   `commit_edit` or `cancel_edit`).
/// - **Help**: hidden ⇄ visible.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Parameters currently in effect.
    params: ParameterSet,

    /// What the reset action restores (resolved config defaults).
    defaults: ParameterSet,

    /// Results for `params`. Always recomputed together with `params`.
    calculation: Calculation,

    /// Index into `fields_for(params.mode)`.
    focused: usize,

    /// Text being typed into the focused field, if editing.
    edit: Option<EditBuffer>,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Last feedback message for the status bar.
    pub status: Option<StatusMessage>,

    /// Label printed after every length.
    unit_label: String,
}

impl AppState {
    /// Create state showing `defaults`.
    ///
    /// Defaults that exceed the item bound are still shown; only later
    /// edits are checked.
    pub fn new(defaults: ParameterSet, unit_label: impl Into<String>) -> Self {
        Self {
            params: defaults,
            defaults,
            calculation: Calculation::compute(&defaults),
            focused: 0,
            edit: None,
            help_visible: false,
            status: None,
            unit_label: unit_label.into(),
        }
    }

    // ===== Accessors =====

    /// Parameters currently in effect.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Parameters the reset action restores.
    pub fn defaults(&self) -> &ParameterSet {
        &self.defaults
    }

    /// Results for the current parameters.
    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    /// Active mode.
    pub fn mode(&self) -> Mode {
        self.params.mode
    }

    /// Label printed after every length.
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    /// Fields shown for the active mode.
    pub fn fields(&self) -> &'static [ParameterField] {
        fields_for(self.params.mode)
    }

    /// Index of the focused field.
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// The focused field.
    pub fn focused_field(&self) -> ParameterField {
        let fields = self.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    /// Edit in progress, if any.
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    /// Whether keys are currently going into an edit buffer.
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    // ===== Mode =====

    /// Switch to `mode`. No-op if already active.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.params.mode == mode {
            return;
        }
        self.edit = None;
        self.focused = 0;
        self.params = self.params.with_mode(mode);
        self.calculation = Calculation::compute(&self.params);
        self.status = None;
        debug!(%mode, "Switched mode");
    }

    /// Switch to the other mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.params.mode.toggle());
    }

    // ===== Focus =====

    /// Focus the next field, wrapping at the end.
    pub fn next_field(&mut self) {
        let len = self.fields().len();
        self.focused = (self.focused + 1) % len;
    }

    /// Focus the previous field, wrapping at the start.
    pub fn prev_field(&mut self) {
        let len = self.fields().len();
        self.focused = (self.focused + len - 1) % len;
    }

    // ===== Editing =====

    /// Start typing into the focused field.
    pub fn begin_edit(&mut self) {
        self.edit = Some(EditBuffer::new(self.focused_field()));
    }

    /// Append a character to the edit buffer.
    pub fn push_edit_char(&mut self, ch: char) {
        if let Some(edit) = self.edit.as_mut() {
            edit.push(ch);
        }
    }

    /// Delete the last typed character.
    pub fn pop_edit_char(&mut self) {
        if let Some(edit) = self.edit.as_mut() {
            edit.pop();
        }
    }

    /// Abandon the edit, keeping the previous value.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Parse the edit buffer and apply it.
    ///
    /// The edit ends either way. On error the previous parameters stay in
    /// effect and the error is shown in the status bar.
    pub fn commit_edit(&mut self) -> Result<(), ParameterError> {
        let Some(edit) = self.edit.take() else {
            return Ok(());
        };

        match edit.parse() {
            Ok(value) => self.replace_params(self.params.with_value(edit.field(), value)),
            Err(err) => {
                warn!(field = edit.field().name(), input = edit.text(), "Rejected edit");
                self.status = Some(StatusMessage::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Nudge the focused field by `steps` multiples of its step.
    ///
    /// Results clamp at zero and are rounded to six decimals so repeated
    /// steps of `0.1` do not drift.
    pub fn adjust_focused(&mut self, steps: f64) -> Result<(), ParameterError> {
        let field = self.focused_field();
        let current = self.params.get(field);
        let adjusted = (current + steps * step(field)).max(0.0);
        let rounded = (adjusted * 1e6).round() / 1e6;
        self.replace_params(self.params.with_value(field, rounded))
    }

    /// Restore every field to its configured default, keeping the mode.
    pub fn reset_to_defaults(&mut self) {
        self.edit = None;
        self.params = self.defaults.with_mode(self.params.mode);
        self.calculation = Calculation::compute(&self.params);
        self.status = Some(StatusMessage::Info("Reset to defaults".to_string()));
    }

    /// Replace the parameter set and recompute.
    ///
    /// Sets whose layouts exceed the item bound are rejected and the
    /// previous parameters stay in effect.
    pub fn replace_params(&mut self, params: ParameterSet) -> Result<(), ParameterError> {
        if let Err(err) = check_item_bound(&params) {
            warn!(error = %err, "Rejected parameter change");
            self.status = Some(StatusMessage::Error(err.to_string()));
            return Err(err);
        }

        self.params = params;
        self.calculation = Calculation::compute(&self.params);
        self.status = None;
        Ok(())
    }

    // ===== Help =====

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            ParameterSet::default(),
            crate::config::DEFAULT_UNIT_LABEL,
        )
    }
}
