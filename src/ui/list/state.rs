use crate::ui::mvi::UiState;

/// State of the name list presenter.
///
/// `names` is fixed after `Load`. `selection` holds a copy of the activated
/// name, so two rows with the same text select the same value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NameListState {
    pub names: Vec<String>,
    /// Highlighted row for keyboard navigation.
    pub cursor: usize,
    pub selection: Option<String>,
}

impl UiState for NameListState {}

impl NameListState {
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.as_deref() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_no_selection() {
        let state = NameListState::default();
        assert!(state.names.is_empty());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn is_selected_compares_by_value() {
        let state = NameListState {
            names: vec!["Jan".into(), "Jan".into()],
            cursor: 1,
            selection: Some("Jan".into()),
        };
        assert!(state.is_selected(&state.names[0]));
        assert!(state.is_selected(&state.names[1]));
        assert!(!state.is_selected("Piet"));
    }
}
