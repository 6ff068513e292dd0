use crate::config::NavigationMode;
use crate::ui::mvi::UiState;

/// A screen pushed on top of the list in stack mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Detail { name: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub mode: NavigationMode,
    /// Routes above the list, last is on top. Always empty in split mode.
    pub path: Vec<Route>,
    /// Collapsed split layout shows the detail instead of the list.
    /// Always false in stack mode.
    pub detail_shown: bool,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn new(mode: NavigationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn top(&self) -> Option<&Route> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// True when a back navigation would change anything.
    pub fn can_go_back(&self) -> bool {
        match self.mode {
            NavigationMode::Stack => !self.path.is_empty(),
            NavigationMode::Split => self.detail_shown,
        }
    }
}
