use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::report::{BatchSummary, FileSummary};
use crate::LogScrub;

/// Scrub many files with a worker per file. Each file is processed
/// independently; one file's failure is recorded in its summary and never
/// aborts the rest of the batch.
pub fn process_files(
    scrub: &LogScrub,
    paths: &[PathBuf],
    language: Option<&str>,
    write: bool,
) -> BatchSummary {
    let start = Instant::now();

    let mut batch: BatchSummary = paths
        .par_iter()
        .map(|path| process_one(scrub, path, language, write))
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    batch.elapsed_ms = start.elapsed().as_millis() as u64;
    batch
}

fn process_one(
    scrub: &LogScrub,
    path: &PathBuf,
    language: Option<&str>,
    write: bool,
) -> FileSummary {
    let outcome = match scrub.scrub_file(path, language) {
        Ok(outcome) => outcome,
        Err(err) => return FileSummary::failed(path.clone(), err.to_string()),
    };

    if write && outcome.modified {
        if let Err(err) = fs::write(path, &outcome.result.text) {
            return FileSummary::failed(path.clone(), err.to_string());
        }
        debug!(path = %path.display(), "rewrote file");
    }

    FileSummary {
        path: path.clone(),
        language: Some(outcome.language.to_string()),
        removed: outcome.result.removed,
        preserved: outcome.result.preserved,
        stripped_comments: outcome.result.stripped_comments,
        modified: outcome.modified,
        error: None,
    }
}
