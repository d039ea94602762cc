//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings for the main screen.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Keys bound to `action`, for help text.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;

        // Tabs
        bind(KeyCode::Tab, none, KeyAction::NextTab);
        bind(KeyCode::Char(']'), none, KeyAction::NextTab);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        bind(KeyCode::Char('['), none, KeyAction::PrevTab);
        bind(KeyCode::Char('1'), none, KeyAction::SelectTab(1));
        bind(KeyCode::Char('2'), none, KeyAction::SelectTab(2));
        bind(KeyCode::Char('3'), none, KeyAction::SelectTab(3));

        // Exercise list
        bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        bind(KeyCode::Down, none, KeyAction::CursorDown);
        bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        bind(KeyCode::Up, none, KeyAction::CursorUp);
        bind(KeyCode::Enter, none, KeyAction::ToggleExpand);
        bind(KeyCode::Char(' '), none, KeyAction::ToggleExpand);
        bind(KeyCode::Char('n'), none, KeyAction::NextSet);
        bind(KeyCode::Char('p'), none, KeyAction::PrevSet);

        // Mutations
        bind(KeyCode::Char('a'), none, KeyAction::AddExercise);
        bind(KeyCode::Char('s'), none, KeyAction::AddSet);
        bind(KeyCode::Char('d'), none, KeyAction::DeleteExercise);
        bind(KeyCode::Char('x'), none, KeyAction::DeleteSet);

        // Screens
        bind(KeyCode::Char('b'), none, KeyAction::OpenLibrary);
        bind(KeyCode::Char('c'), none, KeyAction::OpenHistory);
        bind(KeyCode::Char('u'), none, KeyAction::ToggleUnits);

        // Application
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
