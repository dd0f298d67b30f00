use clap::Parser;

use stockbook_cli::{Cli, commands};
use stockbook_infra::InventoryConfig;

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let cli = Cli::parse();
    let config = InventoryConfig::from_env();

    commands::run(cli, &config, &mut std::io::stdout().lock())
}
