use anyhow::Result;
use colored::Colorize;

use logscrub::profile::PROFILES;

pub fn handle() -> Result<()> {
    println!("{}", "Supported languages".bright_blue().bold());
    println!("{}", "===================".bright_blue());

    for profile in PROFILES {
        let extensions = profile
            .extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<12} {:<12} {} ({} signatures)",
            profile.id.bright_green(),
            profile.name,
            extensions.bright_black(),
            profile.signatures.len()
        );
    }

    println!(
        "\nUse the first column with {}",
        "--language <ID>".bright_cyan()
    );
    Ok(())
}
