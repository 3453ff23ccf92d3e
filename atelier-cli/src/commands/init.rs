//! `atelier init [PATH]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use atelier_core::registry::{self, RootStatus};
use atelier_core::AtelierError;

use crate::prompt;

/// Establish or repair the root directory.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Absolute path for the root directory; prompted for when omitted.
    pub path: Option<String>,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        match registry::stored_root().context("failed to read stored state")? {
            None => {
                let raw = match self.path {
                    Some(path) => path,
                    None => prompt::input_line("Root directory (absolute path, no ~)")?
                        .ok_or(AtelierError::MissingInput("root path"))?,
                };
                let root = registry::install_root(&raw)
                    .with_context(|| format!("failed to create root directory '{raw}'"))?;
                tracing::info!(path = %root.fs_path().display(), "installed root directory");
                println!("{} Created root directory at {root}", "✓".green());
            }
            // Already configured: repair if the directory is gone, never
            // re-prompt.
            Some(root) => match registry::repair_root(&root)? {
                RootStatus::Intact => {
                    tracing::debug!(path = %root.fs_path().display(), "root directory intact");
                    println!("Root directory already set: {root}");
                }
                RootStatus::Recreated => {
                    tracing::info!(path = %root.fs_path().display(), "recreated root directory");
                    println!("{} Recreated root directory at {root}", "✓".green());
                }
            },
        }
        Ok(())
    }
}
