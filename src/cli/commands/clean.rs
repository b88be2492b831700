use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

use logscrub::{batch, BatchSummary, LogScrub, ScrubMode};

use super::discover_files;
use crate::cli::ModeArg;

pub fn handle(
    paths: Vec<PathBuf>,
    write: bool,
    language: Option<String>,
    mode: Option<ModeArg>,
    json: bool,
) -> Result<()> {
    let mut scrub = LogScrub::new(".").context("Failed to load logscrub configuration")?;
    if let Some(mode) = mode {
        scrub.set_mode(mode.into());
    }

    if paths.is_empty() {
        return filter_stdin(&scrub, language.as_deref());
    }

    let files = discover_files(&paths, &scrub.config().data);
    if files.is_empty() {
        bail!("no files with a supported language found under the given paths");
    }

    let summary = batch::process_files(&scrub, &files, language.as_deref(), write);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary, write, scrub.config().data.mode);
    Ok(())
}

/// Filter mode: read one buffer from stdin, write the scrubbed buffer to
/// stdout. The language cannot be inferred, so it must be given.
fn filter_stdin(scrub: &LogScrub, language: Option<&str>) -> Result<()> {
    let Some(language) = language else {
        bail!("reading from stdin requires --language");
    };

    let mut buffer = Vec::new();
    std::io::stdin().read_to_end(&mut buffer)?;

    let result = scrub.scrub_bytes(&buffer, language, std::path::Path::new("stdin"))?;
    print!("{}", result.text);

    for note in &result.notes {
        eprintln!("{} line {}: {}", "⚠".bright_yellow(), note.line, note.message);
    }
    Ok(())
}

fn print_summary(summary: &BatchSummary, write: bool, mode: ScrubMode) {
    let removed_label = match mode {
        ScrubMode::Delete => "removed",
        ScrubMode::Comment => "commented out",
    };

    for file in &summary.files {
        if let Some(error) = &file.error {
            println!(
                "{} {} {}",
                "✗".bright_red(),
                file.path.display(),
                error.bright_red()
            );
            continue;
        }
        if !file.modified && file.preserved == 0 {
            continue;
        }

        let mut parts = Vec::new();
        if file.removed > 0 {
            parts.push(format!("{} {}", file.removed, removed_label));
        }
        if file.stripped_comments > 0 {
            parts.push(format!("{} dead comments stripped", file.stripped_comments));
        }
        if file.preserved > 0 {
            parts.push(format!("{} preserved", file.preserved));
        }
        println!(
            "{} {} {}",
            "•".bright_blue(),
            file.path.display(),
            parts.join(", ").bright_black()
        );
    }

    println!(
        "\n{} files scanned, {} modified, {} log statements {}, {} dead comments stripped, {} preserved ({} ms)",
        summary.files.len(),
        summary.files_modified,
        summary.total_removed,
        removed_label,
        summary.total_stripped_comments,
        summary.total_preserved,
        summary.elapsed_ms
    );

    if summary.files_failed > 0 {
        println!(
            "{} {} file(s) failed",
            "⚠".bright_yellow(),
            summary.files_failed
        );
    }

    if !write && summary.total_changes() > 0 {
        println!(
            "\n{} Dry run only. Re-run with {} to apply changes.",
            "ℹ".bright_cyan(),
            "--write".bright_cyan()
        );
    }
}
