//! Link command - regenerate rust-analyzer linked projects from disk

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::manifest;
use crate::settings::{Settings, SETTINGS_PATH};

/// Execute the link command against the current directory.
pub fn execute(pattern: Option<&str>, dry_run: bool) -> Result<()> {
    run_in(Path::new("."), pattern, dry_run)
}

/// The full pipeline, rooted at an explicit directory so tests can drive it
/// against a fixture tree.
pub fn run_in(root: &Path, pattern: Option<&str>, dry_run: bool) -> Result<()> {
    let filter = manifest::compile_filter(pattern)?;
    let manifests = manifest::find_manifests(root, filter.as_ref())?;

    if manifests.is_empty() {
        println!("{} no matching Cargo manifests found", "Note:".yellow());
    } else {
        println!("{} {} manifest(s):", "Found:".green(), manifests.len());
        for path in &manifests {
            println!("  {}", path);
        }
    }

    if dry_run {
        println!("Would update {}", root.join(SETTINGS_PATH).display());
        return Ok(());
    }

    let settings_path = root.join(SETTINGS_PATH);
    let mut settings = Settings::load(&settings_path)?;
    settings.set_linked_projects(&manifests);
    settings.save()?;

    println!("{} {}", "Updated:".green(), settings_path.display());
    Ok(())
}
