//! ra-linker: regenerate rust-analyzer linked projects in VS Code settings
//!
//! Scans the current directory tree for `Cargo.toml` manifests and rewrites
//! the `rust-analyzer.linkedProjects` key of `.vscode/settings.json` to the
//! discovered set, leaving every other setting untouched.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use ra_linker::commands;

#[derive(Parser)]
#[command(name = "ra-linker")]
#[command(about = "Regenerate rust-analyzer linked projects from the Cargo manifests on disk", long_about = None)]
#[command(version)]
struct Cli {
    /// Filter pattern (regex); only matching manifest paths are linked
    pattern: Option<String>,

    /// Show what would be linked without modifying the settings file
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dry_run {
        println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
    }

    commands::link::execute(cli.pattern.as_deref(), cli.dry_run)?;

    Ok(())
}
