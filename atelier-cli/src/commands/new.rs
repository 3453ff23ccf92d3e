//! `atelier new [NAME]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use atelier_core::{projects, registry, AtelierError, ProjectName};

use crate::prompt;

/// Create a new project directory under the root.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name; prompted for when omitted.
    pub name: Option<String>,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        // Root gate comes before the prompt.
        let root = registry::require_root()?;

        let name = match self.name {
            Some(name) => name,
            None => prompt::input_line("Project name")?
                .ok_or(AtelierError::MissingInput("project name"))?,
        };
        let name = ProjectName::from(name);

        let path = projects::create(&root, &name)
            .with_context(|| format!("failed to create project '{name}'"))?;
        tracing::info!(path = %path.display(), "created project directory");
        println!(
            "{} Created project '{}' at {}",
            "✓".green(),
            name,
            path.display()
        );
        Ok(())
    }
}
