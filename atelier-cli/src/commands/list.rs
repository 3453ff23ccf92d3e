//! `atelier list`

use anyhow::{Context, Result};

use atelier_core::{projects, registry};

pub fn run() -> Result<()> {
    let root = registry::require_root()?;
    let names = projects::list(&root)
        .with_context(|| format!("failed to read projects under {root}"))?;

    if names.is_empty() {
        println!("No projects yet.");
        println!("Run: atelier new <name>");
        return Ok(());
    }

    println!("Projects under {root}:");
    for name in &names {
        println!("  * {name}");
    }
    Ok(())
}
