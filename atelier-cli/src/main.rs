//! Atelier — project directory manager CLI.
//!
//! # Usage
//!
//! ```text
//! atelier init [PATH]     establish or repair the root directory
//! atelier new [NAME]      create a project directory under the root
//! atelier list            list existing project directories
//! atelier open [NAME]     open a project in the editor
//! atelier reset           clear the stored root path (diagnostic)
//! ```

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{init::InitArgs, new::NewArgs, open::OpenArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "atelier",
    version,
    about = "Create, list, and open project directories under a configured root",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Establish or repair the root directory.
    Init(InitArgs),

    /// Create a new project directory under the root.
    New(NewArgs),

    /// List existing project directories.
    List,

    /// Open an existing project in the editor.
    Open(OpenArgs),

    /// Clear the stored root path and reserved config location (diagnostic).
    Reset,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::New(args) => args.run(),
        Commands::List => commands::list::run(),
        Commands::Open(args) => args.run(),
        Commands::Reset => commands::reset::run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_env("ATELIER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
