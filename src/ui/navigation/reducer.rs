use crate::config::NavigationMode;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavigationIntent;
use crate::ui::navigation::state::{NavigationState, Route};

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state.mode, intent) {
            (NavigationMode::Stack, NavigationIntent::Push { name }) => {
                let mut path = state.path;
                path.push(Route::Detail { name });
                NavigationState { path, ..state }
            }
            (NavigationMode::Stack, NavigationIntent::Pop) => {
                let mut path = state.path;
                path.pop();
                NavigationState { path, ..state }
            }
            (NavigationMode::Split, NavigationIntent::Push { .. }) => NavigationState {
                detail_shown: true,
                ..state
            },
            (NavigationMode::Split, NavigationIntent::Pop) => NavigationState {
                detail_shown: false,
                ..state
            },
        }
    }
}
