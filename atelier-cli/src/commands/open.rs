//! `atelier open [NAME]`

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use clap::Args;

use atelier_core::{projects, registry, ProjectName};

use crate::prompt;

/// Open an existing project in the editor.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Project to open; selected interactively when omitted.
    pub name: Option<String>,
}

impl OpenArgs {
    pub fn run(self) -> Result<()> {
        let root = registry::require_root()?;
        let names = projects::list(&root)
            .with_context(|| format!("failed to read projects under {root}"))?;

        let name = match self.name {
            Some(name) => {
                let name = ProjectName::from(name);
                if !names.contains(&name) {
                    bail!("no project named '{name}' under {root}");
                }
                name
            }
            None => {
                if names.is_empty() {
                    println!("No projects yet.");
                    println!("Run: atelier new <name>");
                    return Ok(());
                }
                let items: Vec<String> = names.iter().map(|n| n.0.clone()).collect();
                match prompt::select("Open project", &items)? {
                    Some(index) => names[index].clone(),
                    None => {
                        tracing::debug!("nothing selected in the open dialog");
                        return Ok(());
                    }
                }
            }
        };

        let path = projects::project_path(&root, &name);
        let command = editor_command();
        spawn_detached(&command, &path)
            .with_context(|| format!("failed to launch '{}'", command.join(" ")))?;
        tracing::info!(path = %path.display(), "opening project");
        println!("Opening '{}' with {}", name, command[0]);
        Ok(())
    }
}

/// The editor invocation, resolved from `ATELIER_OPEN`, `VISUAL`, or
/// `EDITOR`. Defaults to a new VS Code window.
fn editor_command() -> Vec<String> {
    for var in ["ATELIER_OPEN", "VISUAL", "EDITOR"] {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                if let Ok(parts) = shell_words::split(&value) {
                    if !parts.is_empty() {
                        return parts;
                    }
                }
            }
        }
    }
    vec![String::from("code"), String::from("--new-window")]
}

/// Spawn the editor without waiting on it; only a failure to spawn at all
/// is reported.
fn spawn_detached(command: &[String], path: &Path) -> Result<()> {
    let (program, args) = command.split_first().context("empty editor command")?;
    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn '{program}'"))?;
    Ok(())
}
