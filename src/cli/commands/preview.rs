use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use logscrub::profile;
use logscrub::resolver::{self, Action};
use logscrub::scanner::{Scanner, SourceBuffer};
use logscrub::LogScrub;

pub fn handle(path: &Path, language: Option<&str>) -> Result<()> {
    let scrub = LogScrub::new(".").context("Failed to load logscrub configuration")?;

    let profile = match language {
        Some(id) => profile::profile_for(id)?,
        None => profile::profile_for_path(path)?,
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    println!("{}", "Logscrub Preview".bright_blue().bold());
    println!("{}", "================".bright_blue());
    println!("File: {} ({})\n", path.display(), profile.name);

    let config = &scrub.config().data;
    let signatures = config.log_types.signatures_for(profile);
    let buffer = SourceBuffer::new(&content);
    let scanner = Scanner::new(profile, &signatures);

    let (mut spans, notes) = scanner.scan(&buffer);
    if !config.remove_commented_logs {
        spans.retain(|s| s.kind != logscrub::scanner::SpanKind::CommentedCall);
    }

    let mut tags: Vec<&str> = profile.preserve_tags.to_vec();
    for tag in &config.preserve_tags {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    let intents = resolver::resolve(&spans, &buffer, profile, &tags);

    if intents.is_empty() {
        println!("{} No log statements found", "✓".bright_green());
        return Ok(());
    }

    let mut removed = 0;
    let mut preserved = 0;
    let mut stripped = 0;
    for intent in &intents {
        let span = intent.span;
        let (symbol, verb) = match intent.action {
            Action::Remove => {
                removed += 1;
                ("-".bright_red(), "remove".bright_red())
            }
            Action::StripComment => {
                stripped += 1;
                ("-".bright_yellow(), "strip dead comment".bright_yellow())
            }
            Action::Keep => {
                preserved += 1;
                ("✓".bright_green(), "keep".bright_green())
            }
        };
        for line in span.start_line..=span.end_line {
            println!(
                "{} {:>5} {} {}",
                symbol,
                line + 1,
                verb,
                buffer.line(line).trim_end()
            );
        }
    }

    for note in &notes {
        println!("{} line {}: {}", "⚠".bright_yellow(), note.line, note.message);
    }

    println!(
        "\n{} to remove, {} dead comments to strip, {} preserved",
        removed, stripped, preserved
    );
    println!(
        "Run {} to apply",
        format!("logscrub clean {} --write", path.display()).bright_cyan()
    );

    Ok(())
}
