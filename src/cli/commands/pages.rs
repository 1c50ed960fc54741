use anyhow::Result;

use super::Command;
use crate::book::PageCatalog;

pub struct PagesCommand {
    pub json: bool,
}

impl PagesCommand {
    pub fn new() -> Self {
        Self { json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn render(&self, catalog: &PageCatalog) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(catalog.pages())?);
        }
        let lines: Vec<String> = catalog
            .pages()
            .iter()
            .map(|page| format!("  {}. {}", page.id, page.title))
            .collect();
        Ok(format!("📚 {} pages:\n{}", catalog.len(), lines.join("\n")))
    }
}

impl Default for PagesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for PagesCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.render(&PageCatalog::new())?);
        Ok(())
    }
}
