//! Domain-level keyboard actions independent of key bindings.

/// Actions available on the main screen when no overlay is open.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Overlays (forms, library, history) read raw keys instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Tabs
    /// Switch to the next tab. Default: Tab / ]
    NextTab,
    /// Switch to the previous tab. Default: Shift+Tab / [
    PrevTab,
    /// Select a tab by 1-based index. Default: 1-3
    SelectTab(usize),

    // Exercise list
    /// Move the exercise cursor down. Default: j / Down
    CursorDown,
    /// Move the exercise cursor up. Default: k / Up
    CursorUp,
    /// Expand or collapse the exercise under the cursor. Default: Enter / Space
    ToggleExpand,
    /// Move the set cursor down inside the expanded exercise. Default: n
    NextSet,
    /// Move the set cursor up inside the expanded exercise. Default: p
    PrevSet,

    // Mutations
    /// Open the add-exercise form. Default: a
    AddExercise,
    /// Open the add-set form for the selected exercise. Default: s
    AddSet,
    /// Delete the selected exercise. Default: d
    DeleteExercise,
    /// Delete the selected set of the expanded exercise. Default: x
    DeleteSet,

    // Screens
    /// Open the exercise library. Default: b
    OpenLibrary,
    /// Open the workout history calendar. Default: c
    OpenHistory,
    /// Toggle kg/lbs display. Default: u
    ToggleUnits,

    // Application
    /// Show keyboard help. Default: ?
    Help,
    /// Exit. Default: q / Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tab_carries_index() {
        assert_ne!(KeyAction::SelectTab(1), KeyAction::SelectTab(2));
        assert_eq!(KeyAction::SelectTab(3), KeyAction::SelectTab(3));
    }
}
