pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
