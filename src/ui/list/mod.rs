mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::NameListState;
pub use view::NameListView;
