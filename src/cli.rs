use std::path::PathBuf;

use clap::Parser;

use crate::config::NavigationMode;

/// Browse a list of names in the terminal.
#[derive(Debug, Parser)]
#[command(name = "navlist", version, about)]
pub struct Cli {
    /// Override the configured navigation mode
    #[arg(long, value_enum)]
    pub mode: Option<NavigationMode>,

    /// Path to the config file (default: <config dir>/navlist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the log file (default: <cache dir>/navlist/navlist.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
