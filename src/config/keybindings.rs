//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Keys typed while a field is being edited are not looked up here.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted punctuation (`?`, `+`) carries
    /// the SHIFT modifier, so a miss is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            } else {
                None
            }
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Mode
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::ToggleMode);
        keys.bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::SelectFlat);
        keys.bind(KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::SelectTriangle);

        // Field navigation
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextField);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::NextField);
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::NextField);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevField);
        keys.bind(KeyCode::BackTab, KeyModifiers::NONE, KeyAction::PrevField);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PrevField);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::PrevField);

        // Editing
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::StartEdit);
        keys.bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::StartEdit);
        keys.bind(KeyCode::Char('+'), KeyModifiers::NONE, KeyAction::Increment);
        keys.bind(KeyCode::Char('='), KeyModifiers::NONE, KeyAction::Increment);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::Increment);
        keys.bind(KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::Decrement);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::Decrement);
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::ResetDefaults);

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        keys
    }
}
