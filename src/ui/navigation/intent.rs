use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavigationIntent {
    /// Show the detail for `name`. Stack mode pushes a route; split mode
    /// reveals the detail column when collapsed.
    Push { name: String },
    /// Back navigation. Discards the top route (stack) or hides the
    /// collapsed detail column (split).
    Pop,
}

impl Intent for NavigationIntent {}
