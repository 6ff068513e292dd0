use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Populate the list. Sent once when the presenter is built.
    Load { names: Vec<String> },
    MoveUp,
    MoveDown,
    /// User activated the row at `index`. Selects its value.
    Activate { index: usize },
    /// Back navigation in stack mode discards the selection.
    ClearSelection,
}

impl Intent for ListIntent {}
