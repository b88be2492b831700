use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use logscrub::config::project::CONFIG_FILE;
use logscrub::LogScrub;

pub fn handle(path: &Path) -> Result<()> {
    println!(
        "{}",
        "Initializing logscrub in your project...".bright_blue().bold()
    );

    LogScrub::init(path).context("Failed to initialize logscrub in the specified directory")?;
    println!(
        "  {} Wrote {} with default settings",
        "✓".bright_green(),
        CONFIG_FILE
    );

    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  1. Preview what would be removed:");
    println!("     {}", "logscrub clean src/".bright_yellow());
    println!("  2. Apply the changes:");
    println!("     {}", "logscrub clean src/ --write".bright_yellow());
    println!("  3. Keep a statement by marking it:");
    println!(
        "     {}",
        "// @preserve\n     System.out.println(\"important\");".bright_yellow()
    );

    Ok(())
}
