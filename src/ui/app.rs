use crate::config::{Config, NavigationMode};
use crate::store::{AppStore, StoreHandle};
use crate::ui::detail::detail_text;
use crate::ui::list::{ListIntent, ListReducer, NameListState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState, Route};

/// What the body area currently shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
    /// List and detail side by side.
    Split,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root composer. Owns presenter state and the shared store handle, and
/// decides how list and detail are composed.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    split_min_width: u16,
    store: StoreHandle,
    /// Name list presenter state (MVI pattern). Owns the selection.
    list: NameListState,
    /// Navigation stack / split visibility (MVI pattern).
    navigation: NavigationState,
}

impl App {
    pub fn new(config: &Config, store: StoreHandle) -> Self {
        let mut app = Self {
            should_quit: false,
            size: None,
            split_min_width: config.navigation.split_min_width,
            store,
            list: NameListState::default(),
            navigation: NavigationState::new(config.navigation.mode),
        };
        app.dispatch_list(ListIntent::Load {
            names: config.names.clone(),
        });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> NavigationMode {
        self.navigation.mode
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn store_handle(&self) -> &StoreHandle {
        &self.store
    }

    pub fn list(&self) -> &NameListState {
        &self.list
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn names(&self) -> &[String] {
        &self.list.names
    }

    pub fn selection(&self) -> Option<&str> {
        self.list.selection()
    }

    pub fn on_tick(&mut self) {}

    /// Records the body size. Split mode uses the width to choose between
    /// the side-by-side and collapsed layouts.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// True when split mode has room for both columns. Before the first
    /// resize the wide layout is assumed.
    pub fn is_wide(&self) -> bool {
        self.size
            .map(|(cols, _)| cols >= self.split_min_width)
            .unwrap_or(true)
    }

    pub fn visible_screen(&self) -> Screen {
        match self.navigation.mode {
            NavigationMode::Stack => match self.navigation.top() {
                Some(Route::Detail { .. }) => Screen::Detail,
                None => Screen::List,
            },
            NavigationMode::Split if self.is_wide() => Screen::Split,
            NavigationMode::Split if self.navigation.detail_shown => Screen::Detail,
            NavigationMode::Split => Screen::List,
        }
    }

    /// Selection the detail presenter renders. In stack mode that is the
    /// value the top route was pushed with; in split mode it is the shared
    /// list selection.
    pub fn detail_selection(&self) -> Option<&str> {
        match self.navigation.mode {
            NavigationMode::Stack => match self.navigation.top() {
                Some(Route::Detail { name }) => Some(name.as_str()),
                None => None,
            },
            NavigationMode::Split => self.list.selection(),
        }
    }

    pub fn detail_text(&self) -> String {
        detail_text(self.detail_selection())
    }

    pub fn move_cursor_up(&mut self) {
        self.dispatch_list(ListIntent::MoveUp);
    }

    pub fn move_cursor_down(&mut self) {
        self.dispatch_list(ListIntent::MoveDown);
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.list.cursor);
    }

    /// User activated row `index`.
    ///
    /// Sets the selection to that row's value and navigates to the detail.
    /// Indexes outside the list are ignored. In stack mode activation is only
    /// possible while the list is on screen.
    pub fn activate(&mut self, index: usize) {
        if self.visible_screen() == Screen::Detail {
            return;
        }
        let Some(name) = self.list.names.get(index).cloned() else {
            return;
        };
        self.dispatch_list(ListIntent::Activate { index });
        tracing::debug!(index, name = %name, mode = self.mode().label(), "Selection changed");
        self.dispatch_navigation(NavigationIntent::Push { name });
    }

    /// Back navigation. Pops the detail in stack mode and clears the
    /// selection; hides the collapsed detail in split mode and keeps it.
    pub fn back(&mut self) {
        if !self.navigation.can_go_back() {
            return;
        }
        self.dispatch_navigation(NavigationIntent::Pop);
        if self.navigation.mode == NavigationMode::Stack {
            self.dispatch_list(ListIntent::ClearSelection);
        }
        tracing::debug!(depth = self.navigation.depth(), "Navigated back");
    }

    /// Dispatch an intent to the list reducer.
    fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    /// Dispatch an intent to the navigation reducer.
    fn dispatch_navigation(&mut self, intent: NavigationIntent) {
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
    }
}
