//! Shared test helpers.

#![allow(dead_code)]

use navlist::config::{Config, NavigationMode};
use navlist::store::StoreHandle;
use navlist::ui::app::App;

pub const REFERENCE_NAMES: [&str; 9] = [
    "Dirk", "Jan", "Piet", "Karel", "Janne", "Karel", "Piet", "Dirk", "Jan",
];

pub fn config_with_mode(mode: NavigationMode) -> Config {
    let mut config = Config::default();
    config.navigation.mode = mode;
    config
}

pub fn make_app(mode: NavigationMode) -> App {
    App::new(&config_with_mode(mode), StoreHandle::new())
}
