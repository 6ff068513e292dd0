//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Presenter state only changes inside a reducer; views read state and never
//! write it.

/// Marker for presenter state. Cloned to produce new states, compared to
/// detect changes.
pub trait UiState: Clone + PartialEq + Default + 'static {}

/// Marker for user actions and navigation events fed to a reducer.
pub trait Intent: 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
