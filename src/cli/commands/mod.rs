use anyhow::Result;

use crate::book::PageCatalog;
use crate::config::{config, PortfolioBookConfig};
use crate::navigation::PageNavigator;

pub mod browse;
pub mod pages;
pub mod walk;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Everything a reading session needs: the book, its navigator and settings
pub struct Session {
    pub catalog: PageCatalog,
    pub navigator: PageNavigator,
    pub config: PortfolioBookConfig,
}

impl Session {
    pub fn new(config: PortfolioBookConfig) -> Self {
        let catalog = PageCatalog::new();
        Self {
            navigator: PageNavigator::new(catalog.len()),
            catalog,
            config,
        }
    }

    pub fn from_global_config() -> Result<Self> {
        Ok(Self::new(config()?.clone()))
    }
}

pub async fn show_how_to_read() -> Result<()> {
    println!("📖 Portfolio Book");
    println!();
    println!("To get started:");
    println!("  📚 portfolio-book pages                 # List the pages");
    println!("  👉 portfolio-book browse                # Read interactively");
    println!("  🎬 portfolio-book walk --keys right,end # Replay key presses");
    println!();
    println!("Keys: left, right, home, end, contact, or a page number (1-7)");
    Ok(())
}
