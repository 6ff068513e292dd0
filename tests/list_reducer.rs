use navlist::ui::list::{ListIntent, ListReducer, NameListState};
use navlist::ui::mvi::Reducer;

fn names() -> Vec<String> {
    ["Dirk", "Jan", "Piet", "Jan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn loaded() -> NameListState {
    ListReducer::reduce(NameListState::default(), ListIntent::Load { names: names() })
}

#[test]
fn load_keeps_order_and_resets_cursor() {
    let state = loaded();
    assert_eq!(state.names, names());
    assert_eq!(state.cursor, 0);
    assert!(state.selection.is_none());
}

#[test]
fn activate_selects_value_and_moves_cursor() {
    let state = ListReducer::reduce(loaded(), ListIntent::Activate { index: 2 });
    assert_eq!(state.selection(), Some("Piet"));
    assert_eq!(state.cursor, 2);
}

#[test]
fn activate_every_index_selects_that_name() {
    for (index, name) in names().iter().enumerate() {
        let state = ListReducer::reduce(loaded(), ListIntent::Activate { index });
        assert_eq!(state.selection(), Some(name.as_str()));
    }
}

#[test]
fn duplicate_rows_select_equal_values() {
    let first = ListReducer::reduce(loaded(), ListIntent::Activate { index: 1 });
    let second = ListReducer::reduce(loaded(), ListIntent::Activate { index: 3 });
    assert_eq!(first.selection, second.selection);
}

#[test]
fn activate_out_of_range_is_noop() {
    let before = ListReducer::reduce(loaded(), ListIntent::Activate { index: 1 });
    let after = ListReducer::reduce(before.clone(), ListIntent::Activate { index: 99 });
    assert_eq!(before, after);
}

#[test]
fn cursor_moves_do_not_touch_selection() {
    let mut state = ListReducer::reduce(loaded(), ListIntent::Activate { index: 0 });
    state = ListReducer::reduce(state, ListIntent::MoveDown);
    state = ListReducer::reduce(state, ListIntent::MoveDown);
    assert_eq!(state.cursor, 2);
    assert_eq!(state.selection(), Some("Dirk"));
}

#[test]
fn move_down_wraps_to_first() {
    let mut state = loaded();
    for _ in 0..4 {
        state = ListReducer::reduce(state, ListIntent::MoveDown);
    }
    assert_eq!(state.cursor, 0);
}

#[test]
fn move_up_wraps_to_last() {
    let state = ListReducer::reduce(loaded(), ListIntent::MoveUp);
    assert_eq!(state.cursor, 3);
}

#[test]
fn moves_on_empty_list_stay_at_zero() {
    let state = ListReducer::reduce(NameListState::default(), ListIntent::MoveUp);
    assert_eq!(state.cursor, 0);
    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    assert_eq!(state.cursor, 0);
}

#[test]
fn clear_selection_keeps_rows_and_cursor() {
    let selected = ListReducer::reduce(loaded(), ListIntent::Activate { index: 2 });
    let cleared = ListReducer::reduce(selected, ListIntent::ClearSelection);
    assert!(cleared.selection.is_none());
    assert_eq!(cleared.cursor, 2);
    assert_eq!(cleared.names, names());
}
