use anyhow::Context;

use stockledger_cli::{Config, demo};

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(data_file = %config.data_file.display(), "starting inventory demonstration");

    let stdout = std::io::stdout();
    demo::run(&config, &mut stdout.lock())?;
    Ok(())
}
