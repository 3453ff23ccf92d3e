//! `atelier reset` — diagnostic greeting plus state clear.

use anyhow::{Context, Result};
use colored::Colorize;

use atelier_core::registry;

pub fn run() -> Result<()> {
    println!("Hello from atelier!");
    registry::reset().context("failed to clear stored state")?;
    tracing::info!("cleared stored root path and reserved config location");
    println!("{} Cleared stored root path.", "✓".green());
    Ok(())
}
