//! Terminal prompts with a line-oriented fallback for piped stdin.
//!
//! `None` from either function means the prompt was cancelled: Esc on a
//! terminal selection, EOF or a blank line on a non-terminal stdin.

use std::io::{BufRead, IsTerminal};

use anyhow::{bail, Context, Result};
use dialoguer::{Input, Select};

fn interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask for a single non-empty line of input.
pub fn input_line(label: &str) -> Result<Option<String>> {
    if interactive() {
        let value: String = Input::new()
            .with_prompt(label)
            .validate_with(|text: &String| -> std::result::Result<(), &str> {
                if text.is_empty() {
                    Err("cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .context("input prompt failed")?;
        Ok(Some(value))
    } else {
        read_stdin_line()
    }
}

/// Pick one of `items`. The non-terminal fallback accepts a 1-based index
/// or an exact item name.
pub fn select(label: &str, items: &[String]) -> Result<Option<usize>> {
    if interactive() {
        Select::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .context("selection prompt failed")
    } else {
        let Some(line) = read_stdin_line()? else {
            return Ok(None);
        };
        if let Ok(index) = line.parse::<usize>() {
            if index == 0 || index > items.len() {
                bail!("selection index {index} out of range");
            }
            return Ok(Some(index - 1));
        }
        match items.iter().position(|item| item == &line) {
            Some(position) => Ok(Some(position)),
            None => bail!("no such choice: '{line}'"),
        }
    }
}

fn read_stdin_line() -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_owned()))
    }
}
