use anyhow::Result;
use clap::Parser;

use portfolio_book::cli::commands::{
    browse::BrowseCommand, pages::PagesCommand, show_how_to_read, walk::WalkCommand, Command,
};
use portfolio_book::cli::{Cli, Commands};
use portfolio_book::config::{config, PortfolioBookConfig};
use portfolio_book::telemetry::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = PortfolioBookConfig::load_env_file();
    init_telemetry(&config()?.observability)?;

    let runtime = tokio::runtime::Runtime::new()?;
    match cli.command {
        None => runtime.block_on(async { show_how_to_read().await }),
        Some(Commands::Pages { json }) => runtime.block_on(async {
            PagesCommand::new().with_json(json).execute().await
        }),
        Some(Commands::Browse) => runtime.block_on(async { BrowseCommand::new().execute().await }),
        Some(Commands::Walk { keys, no_wait, json }) => runtime.block_on(async {
            WalkCommand::new(keys)
                .with_wait(!no_wait)
                .with_json(json)
                .execute()
                .await
        }),
    }
}
