use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Names shown by the list presenter, in display order.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// How the list and detail presenters are composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub mode: NavigationMode,
    /// Narrowest body width (columns) at which split mode shows both
    /// columns. Below it the split view collapses to one column.
    #[serde(default = "default_split_min_width")]
    pub split_min_width: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Selecting a name pushes the detail screen; back pops it.
    #[default]
    Stack,
    /// List and detail share the screen and one selection.
    Split,
}

impl NavigationMode {
    pub fn label(self) -> &'static str {
        match self {
            NavigationMode::Stack => "stack",
            NavigationMode::Split => "split",
        }
    }
}

pub const DEFAULT_NAMES: [&str; 9] = [
    "Dirk", "Jan", "Piet", "Karel", "Janne", "Karel", "Piet", "Dirk", "Jan",
];

fn default_names() -> Vec<String> {
    DEFAULT_NAMES.iter().map(|name| name.to_string()).collect()
}

fn default_split_min_width() -> u16 {
    60
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::default(),
            split_min_width: default_split_min_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: default_names(),
            navigation: NavigationConfig::default(),
        }
    }
}
