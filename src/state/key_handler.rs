//! Keyboard dispatch.
//!
//! Pure function of (state, key, now). The open overlay gets first claim on
//! every key; with no overlay, keys go through [`KeyBindings`].

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, ExerciseField, ExerciseForm, Overlay, Tab};
use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Apply one key press.
pub fn handle_key<Tz: TimeZone>(
    mut state: AppState,
    key: KeyEvent,
    bindings: &KeyBindings,
    now: &DateTime<Tz>,
) -> AppState {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return state;
    }

    let now_utc = now.with_timezone(&Utc);
    match state.overlay.clone() {
        Overlay::None => {
            if let Some(action) = bindings.get(key) {
                state = handle_action(state, action, now);
            }
        }
        Overlay::Help { scroll } => handle_help_key(&mut state, key, scroll),
        Overlay::AddExercise(_) => handle_exercise_form_key(&mut state, key, now_utc),
        Overlay::AddSet(_) => handle_set_form_key(&mut state, key, now_utc),
        Overlay::Library(_) => handle_library_key(&mut state, key),
        Overlay::History(_) => handle_history_key(&mut state, key),
    }
    state
}

/// Apply a main-screen action.
pub fn handle_action<Tz: TimeZone>(
    mut state: AppState,
    action: KeyAction,
    now: &DateTime<Tz>,
) -> AppState {
    match action {
        KeyAction::NextTab => state.tab = state.tab.next(),
        KeyAction::PrevTab => state.tab = state.tab.prev(),
        KeyAction::SelectTab(n) => {
            if let Some(tab) = Tab::from_number(n) {
                state.tab = tab;
            }
        }
        KeyAction::CursorDown if state.tab == Tab::Logger => state.cursor_down(),
        KeyAction::CursorUp if state.tab == Tab::Logger => state.cursor_up(),
        KeyAction::ToggleExpand if state.tab == Tab::Logger => state.toggle_expand(),
        KeyAction::NextSet if state.tab == Tab::Logger => state.next_set(),
        KeyAction::PrevSet if state.tab == Tab::Logger => state.prev_set(),
        KeyAction::DeleteExercise if state.tab == Tab::Logger => {
            state.delete_selected_exercise();
        }
        KeyAction::DeleteSet if state.tab == Tab::Logger => {
            state.delete_selected_set();
        }
        KeyAction::AddSet if state.tab == Tab::Logger => state.open_add_set(),
        KeyAction::CursorDown
        | KeyAction::CursorUp
        | KeyAction::ToggleExpand
        | KeyAction::NextSet
        | KeyAction::PrevSet
        | KeyAction::DeleteExercise
        | KeyAction::DeleteSet
        | KeyAction::AddSet => {}
        KeyAction::AddExercise => state.open_add_exercise(),
        KeyAction::OpenLibrary => state.open_library(),
        KeyAction::OpenHistory => state.open_history(now.date_naive()),
        KeyAction::ToggleUnits => state.toggle_units(),
        KeyAction::Help => state.open_help(),
        KeyAction::Quit => state.should_quit = true,
    }
    state
}

fn is_cancel(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

fn handle_help_key(state: &mut AppState, key: KeyEvent, scroll: u16) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => state.close_overlay(),
        KeyCode::Char('j') | KeyCode::Down => {
            state.overlay = Overlay::Help {
                scroll: scroll.saturating_add(1),
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.overlay = Overlay::Help {
                scroll: scroll.saturating_sub(1),
            }
        }
        _ => {}
    }
}

fn handle_exercise_form_key(state: &mut AppState, key: KeyEvent, now: DateTime<Utc>) {
    if is_cancel(key) {
        state.close_overlay();
        return;
    }
    let Overlay::AddExercise(form) = &mut state.overlay else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
        KeyCode::Left => form.cycle(false),
        KeyCode::Right => form.cycle(true),
        KeyCode::Char(' ')
            if matches!(form.focus, ExerciseField::BodyPart | ExerciseField::Exercise) =>
        {
            form.cycle(true)
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input(c),
        KeyCode::Enter => {
            let Some(request) = form.to_request() else {
                debug!("Add exercise ignored: unparseable field");
                return;
            };
            match state.add_exercise(request, now) {
                Ok(_) => state.close_overlay(),
                Err(rejected) => debug!(%rejected, "Add exercise rejected"),
            }
        }
        _ => {}
    }
}

fn handle_set_form_key(state: &mut AppState, key: KeyEvent, now: DateTime<Utc>) {
    if is_cancel(key) {
        state.close_overlay();
        return;
    }
    let Overlay::AddSet(form) = &mut state.overlay else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input(c),
        KeyCode::Enter => {
            let Some((reps, weight)) = form.parse() else {
                debug!("Add set ignored: unparseable field");
                return;
            };
            let exercise_id = form.exercise_id.clone();
            match state.add_set(&exercise_id, reps, weight, now) {
                Ok(_) => state.close_overlay(),
                Err(rejected) => debug!(%rejected, "Add set rejected"),
            }
        }
        _ => {}
    }
}

fn handle_library_key(state: &mut AppState, key: KeyEvent) {
    let defaults = state.defaults;
    let Overlay::Library(picker) = &mut state.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.close_overlay(),
        KeyCode::Char('j') | KeyCode::Down => picker.down(),
        KeyCode::Char('k') | KeyCode::Up => picker.up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => picker.next_filter(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => picker.prev_filter(),
        KeyCode::Enter => {
            if let Some(entry) = picker.selected() {
                state.overlay = Overlay::AddExercise(ExerciseForm::from_entry(entry, defaults));
            }
        }
        _ => {}
    }
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) {
    let Overlay::History(view) = &mut state.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.close_overlay(),
        KeyCode::Char('h') => view.prev_month(),
        KeyCode::Char('l') => view.next_month(),
        KeyCode::Left => view.move_days(-1),
        KeyCode::Right => view.move_days(1),
        KeyCode::Up => view.move_days(-7),
        KeyCode::Down => view.move_days(7),
        _ => {}
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
