//! Tests for keyboard dispatch.

use super::*;
use crate::model::{BodyPart, ExerciseLog, LibraryFilter, NewExercise};
use chrono::{FixedOffset, NaiveDate};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 14, 18, 0, 0)
        .unwrap()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ch(c: char) -> KeyEvent {
    press(KeyCode::Char(c))
}

fn run(state: AppState, keys: &[KeyEvent]) -> AppState {
    let bindings = KeyBindings::default();
    keys.iter()
        .fold(state, |s, k| handle_key(s, *k, &bindings, &now()))
}

fn type_text(text: &str) -> Vec<KeyEvent> {
    text.chars().map(ch).collect()
}

fn empty() -> AppState {
    AppState::new(ExerciseLog::new())
}

fn with_exercise(sets: u32) -> AppState {
    let mut state = empty();
    state
        .add_exercise(
            NewExercise {
                name: "Deadlift".into(),
                body_part: BodyPart::Back,
                sets,
                reps: 5,
                weight: 140.0,
            },
            now().with_timezone(&Utc),
        )
        .unwrap();
    state
}

// ===== Main screen =====

#[test]
fn number_keys_switch_tabs() {
    let state = run(empty(), &[ch('3')]);
    assert_eq!(state.tab, Tab::Progress);
    let state = run(state, &[press(KeyCode::Tab)]);
    assert_eq!(state.tab, Tab::Logger);
}

#[test]
fn q_quits_from_main_screen() {
    assert!(run(empty(), &[ch('q')]).should_quit);
}

#[test]
fn ctrl_c_quits_even_inside_a_form() {
    let state = run(empty(), &[ch('a')]);
    let state = run(
        state,
        &[KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
    );
    assert!(state.should_quit);
}

#[test]
fn list_keys_do_nothing_outside_logger_tab() {
    let state = with_exercise(2).with_tab(Tab::Today);
    let state = run(state, &[ch('d')]);
    assert_eq!(state.log().len(), 1);
}

#[test]
fn history_opens_on_local_today() {
    let state = run(empty(), &[ch('c')]);
    let Overlay::History(view) = state.overlay else {
        panic!("expected history overlay");
    };
    assert_eq!(view.selected, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
}

// ===== Add exercise =====

#[test]
fn add_exercise_with_defaults() {
    let state = run(empty(), &[ch('a'), press(KeyCode::Enter)]);
    assert_eq!(state.overlay, Overlay::None);
    let exercise = &state.log().exercises()[0];
    assert_eq!(exercise.name(), "Barbell Bench Press");
    assert_eq!(exercise.sets().len(), 3);
    assert_eq!(exercise.volume(), 0.0);
}

#[test]
fn add_exercise_after_choosing_part_and_weight() {
    let mut keys = vec![ch('a'), press(KeyCode::Right), press(KeyCode::Right)];
    // Legs; jump to weight field
    keys.extend([press(KeyCode::Tab); 4]);
    keys.push(press(KeyCode::Backspace));
    keys.extend(type_text("60"));
    keys.push(press(KeyCode::Enter));

    let state = run(empty(), &keys);
    let exercise = &state.log().exercises()[0];
    assert_eq!(exercise.body_part(), BodyPart::Legs);
    assert_eq!(exercise.name(), "Back Squat");
    assert_eq!(exercise.volume(), 3.0 * 10.0 * 60.0);
}

#[test]
fn unparseable_form_keeps_overlay_open() {
    let mut keys = vec![ch('a')];
    keys.extend([press(KeyCode::Tab); 3]);
    keys.extend([press(KeyCode::Backspace); 2]);
    keys.push(press(KeyCode::Enter));

    let state = run(empty(), &keys);
    assert!(matches!(state.overlay, Overlay::AddExercise(_)));
    assert!(state.log().is_empty());
}

#[test]
fn zero_reps_template_is_rejected_and_form_stays() {
    let mut keys = vec![ch('a')];
    keys.extend([press(KeyCode::Tab); 3]);
    keys.extend([press(KeyCode::Backspace); 2]);
    keys.push(ch('0'));
    keys.push(press(KeyCode::Enter));

    let state = run(empty(), &keys);
    assert!(matches!(state.overlay, Overlay::AddExercise(_)));
    assert!(state.log().is_empty());
}

#[test]
fn escape_cancels_form() {
    let state = run(empty(), &[ch('a'), press(KeyCode::Esc)]);
    assert_eq!(state.overlay, Overlay::None);
    assert!(state.log().is_empty());
}

// ===== Add set =====

#[test]
fn add_set_prepends_to_selected_exercise() {
    let mut keys = vec![ch('s')];
    keys.extend([press(KeyCode::Backspace); 3]);
    keys.extend(type_text("8"));
    keys.push(press(KeyCode::Tab));
    keys.extend([press(KeyCode::Backspace); 3]);
    keys.extend(type_text("100"));
    keys.push(press(KeyCode::Enter));

    let state = run(with_exercise(1), &keys);
    assert_eq!(state.overlay, Overlay::None);
    let sets = state.log().exercises()[0].sets();
    assert_eq!(sets.len(), 2);
    assert_eq!((sets[0].reps(), sets[0].weight()), (8, 100.0));
}

#[test]
fn add_set_with_zero_reps_is_noop() {
    let mut keys = vec![ch('s')];
    keys.extend([press(KeyCode::Backspace); 3]);
    keys.push(ch('0'));
    keys.push(press(KeyCode::Enter));

    let state = run(with_exercise(1), &keys);
    assert!(matches!(state.overlay, Overlay::AddSet(_)));
    assert_eq!(state.log().exercises()[0].sets().len(), 1);
}

// ===== Delete =====

#[test]
fn delete_set_from_expanded_exercise() {
    let state = run(with_exercise(3), &[press(KeyCode::Enter), ch('n'), ch('x')]);
    assert_eq!(state.log().exercises()[0].sets().len(), 2);
}

#[test]
fn delete_exercise_removes_it() {
    let state = run(with_exercise(3), &[ch('d')]);
    assert!(state.log().is_empty());
}

// ===== Library =====

#[test]
fn library_choice_opens_prefilled_form() {
    let state = run(
        empty(),
        &[ch('b'), ch('l'), ch('l'), ch('j'), press(KeyCode::Enter)],
    );
    let Overlay::AddExercise(form) = &state.overlay else {
        panic!("expected add-exercise form");
    };
    assert_eq!(form.body_part, BodyPart::Back);
    assert_eq!(form.exercise_index, 1);
}

#[test]
fn library_filter_cycles_through_parts() {
    let state = run(empty(), &[ch('b'), ch('h')]);
    let Overlay::Library(picker) = state.overlay else {
        panic!("expected library overlay");
    };
    assert_eq!(picker.filter, LibraryFilter::Part(BodyPart::FullBody));
}

// ===== History =====

#[test]
fn history_month_navigation() {
    let state = run(empty(), &[ch('c'), ch('l'), press(KeyCode::Down)]);
    let Overlay::History(view) = state.overlay else {
        panic!("expected history overlay");
    };
    assert_eq!(view.selected, NaiveDate::from_ymd_opt(2026, 11, 21).unwrap());
}

// ===== Help =====

#[test]
fn help_scrolls_and_closes() {
    let state = run(empty(), &[ch('?'), ch('j'), ch('j'), ch('k')]);
    assert_eq!(state.overlay, Overlay::Help { scroll: 1 });
    let state = run(state, &[press(KeyCode::Esc)]);
    assert_eq!(state.overlay, Overlay::None);
}
