use std::path::PathBuf;

use serde::Serialize;

/// Per-file change summary, consumable by the report layer.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub language: Option<String>,
    pub removed: usize,
    pub preserved: usize,
    pub stripped_comments: usize,
    pub modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileSummary {
    pub fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            language: None,
            removed: 0,
            preserved: 0,
            stripped_comments: 0,
            modified: false,
            error: Some(error),
        }
    }
}

/// Aggregate over a batch of files. Accumulation is associative, so
/// per-file summaries can be merged in any order.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub files: Vec<FileSummary>,
    pub total_removed: usize,
    pub total_preserved: usize,
    pub total_stripped_comments: usize,
    pub files_modified: usize,
    pub files_failed: usize,
    pub elapsed_ms: u64,
}

impl BatchSummary {
    pub fn push(&mut self, summary: FileSummary) {
        self.total_removed += summary.removed;
        self.total_preserved += summary.preserved;
        self.total_stripped_comments += summary.stripped_comments;
        if summary.modified {
            self.files_modified += 1;
        }
        if summary.error.is_some() {
            self.files_failed += 1;
        }
        self.files.push(summary);
    }

    pub fn total_changes(&self) -> usize {
        self.total_removed + self.total_stripped_comments
    }
}

impl FromIterator<FileSummary> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = FileSummary>>(iter: I) -> Self {
        let mut batch = Self::default();
        for summary in iter {
            batch.push(summary);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(removed: usize, stripped: usize, modified: bool) -> FileSummary {
        FileSummary {
            path: PathBuf::from("a.py"),
            language: Some("python".to_string()),
            removed,
            preserved: 0,
            stripped_comments: stripped,
            modified,
            error: None,
        }
    }

    #[test]
    fn test_accumulation() {
        let batch: BatchSummary = vec![
            summary(2, 1, true),
            summary(0, 0, false),
            FileSummary::failed(PathBuf::from("b.py"), "not valid UTF-8".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.files.len(), 3);
        assert_eq!(batch.total_removed, 2);
        assert_eq!(batch.total_stripped_comments, 1);
        assert_eq!(batch.files_modified, 1);
        assert_eq!(batch.files_failed, 1);
        assert_eq!(batch.total_changes(), 3);
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let forward: BatchSummary = vec![summary(1, 0, true), summary(3, 2, true)]
            .into_iter()
            .collect();
        let backward: BatchSummary = vec![summary(3, 2, true), summary(1, 0, true)]
            .into_iter()
            .collect();
        assert_eq!(forward.total_removed, backward.total_removed);
        assert_eq!(forward.files_modified, backward.files_modified);
    }

    #[test]
    fn test_json_serialization() {
        let batch: BatchSummary = vec![summary(1, 0, true)].into_iter().collect();
        let json = serde_json::to_string(&batch).unwrap();
        assert!(json.contains("\"total_removed\":1"));
        assert!(!json.contains("\"error\""));
    }
}
