use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::NameListState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = NameListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Load { names } => NameListState {
                names,
                cursor: 0,
                selection: None,
            },
            ListIntent::MoveUp => {
                let cursor = if state.cursor == 0 {
                    state.names.len().saturating_sub(1)
                } else {
                    state.cursor - 1
                };
                NameListState { cursor, ..state }
            }
            ListIntent::MoveDown => {
                let cursor = if state.cursor + 1 >= state.names.len() {
                    0
                } else {
                    state.cursor + 1
                };
                NameListState { cursor, ..state }
            }
            ListIntent::Activate { index } => match state.names.get(index) {
                Some(name) => {
                    let selection = Some(name.clone());
                    NameListState {
                        cursor: index,
                        selection,
                        ..state
                    }
                }
                None => state,
            },
            ListIntent::ClearSelection => NameListState {
                selection: None,
                ..state
            },
        }
    }
}
