//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings for the log body. The filter input
/// never consults these bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the code and modifiers are compared, so held keys (repeat
    /// events) act like repeated presses.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
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

        // Vim-style scrolling
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow keys and navigation block
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Half pages
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::HalfPageUp);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::HalfPageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::HalfPageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::HalfPageDown);

        // Follow and buffer
        keys.bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::Resume);
        keys.bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::Clear);

        // Focus
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::FocusFilter);

        // Application
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
