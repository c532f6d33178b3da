//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Keys typed while a field is being edited bypass this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Mode
    /// Switch between flat rail and triangle stair. Default: m
    ToggleMode,
    /// Switch to flat rail mode. Default: f
    SelectFlat,
    /// Switch to triangle stair mode. Default: t
    SelectTriangle,

    // Form navigation
    /// Focus the next input field. Default: Tab/j/↓
    NextField,
    /// Focus the previous input field. Default: Shift+Tab/k/↑
    PrevField,
    /// Start typing a new value into the focused field. Default: Enter/e
    StartEdit,
    /// Increase the focused field by its step. Default: +/=
    Increment,
    /// Decrease the focused field by its step. Default: -
    Decrement,
    /// Restore every field to its configured default. Default: r
    ResetDefaults,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
