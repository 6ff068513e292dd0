use anyhow::Context;
use clap::Parser;
use navlist::cli::Cli;
use navlist::config::Config;
use navlist::logging;
use navlist::store::StoreHandle;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(mode) = cli.mode {
        config.navigation.mode = mode;
    }

    let store = StoreHandle::new();
    navlist::ui::run(&config, store).context("terminal UI failed")?;
    Ok(())
}
