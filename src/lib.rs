pub mod batch;
pub mod config;
pub mod error;
pub mod profile;
pub mod report;
pub mod resolver;
pub mod rewrite;
pub mod scanner;

pub use error::{ScrubError, ScrubResult};
pub use report::{BatchSummary, FileSummary};
pub use rewrite::{ScrubMode, TransformResult};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use profile::LanguageProfile;
use scanner::{Scanner, SourceBuffer, SpanKind};

/// The scrubbed content of one file plus its change counts.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub language: &'static str,
    pub result: TransformResult,
    pub modified: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LogScrub {
    config: config::Config,
}

impl LogScrub {
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::load_or_default(project_root)?;
        Ok(Self { config })
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        config::Config::init(project_root)?;
        Self::new(project_root)
    }

    pub fn with_config(config: config::Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn set_mode(&mut self, mode: ScrubMode) {
        self.config.data.mode = mode;
    }

    /// Scrub a buffer for the given language identifier.
    pub fn scrub(&self, content: &str, language_id: &str) -> ScrubResult<TransformResult> {
        let profile = profile::profile_for(language_id)?;
        Ok(self.scrub_with_profile(content, profile))
    }

    /// Scrub a raw byte buffer, failing on invalid UTF-8. `origin` is only
    /// used for error context.
    pub fn scrub_bytes(
        &self,
        bytes: &[u8],
        language_id: &str,
        origin: &Path,
    ) -> ScrubResult<TransformResult> {
        let profile = profile::profile_for(language_id)?;
        let content = std::str::from_utf8(bytes).map_err(|_| ScrubError::Encoding {
            path: origin.to_path_buf(),
        })?;
        Ok(self.scrub_with_profile(content, profile))
    }

    /// Scrub a file on disk. The language is inferred from the extension
    /// unless `language` overrides it. The file itself is not rewritten.
    pub fn scrub_file(&self, path: &Path, language: Option<&str>) -> ScrubResult<FileOutcome> {
        let profile = match language {
            Some(id) => profile::profile_for(id)?,
            None => profile::profile_for_path(path)?,
        };

        let metadata = fs::metadata(path)?;
        let size_kb = metadata.len() / 1024;
        let limit_kb = self.config.data.max_file_size_kb;
        if size_kb > limit_kb {
            return Err(ScrubError::FileTooLarge {
                path: path.to_path_buf(),
                size_kb,
                limit_kb,
            });
        }

        let bytes = fs::read(path)?;
        let content = std::str::from_utf8(&bytes).map_err(|_| ScrubError::Encoding {
            path: path.to_path_buf(),
        })?;

        let result = self.scrub_with_profile(content, profile);
        let modified = result.removed + result.stripped_comments > 0;
        Ok(FileOutcome {
            path: path.to_path_buf(),
            language: profile.id,
            result,
            modified,
        })
    }

    fn scrub_with_profile(&self, content: &str, profile: &LanguageProfile) -> TransformResult {
        let signatures = self.config.data.log_types.signatures_for(profile);
        let buffer = SourceBuffer::new(content);
        let scanner = Scanner::new(profile, &signatures);

        let (mut spans, notes) = scanner.scan(&buffer);
        if !self.config.data.remove_commented_logs {
            spans.retain(|s| s.kind != SpanKind::CommentedCall);
        }

        let mut tags: Vec<&str> = profile.preserve_tags.to_vec();
        for tag in &self.config.data.preserve_tags {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }

        let intents = resolver::resolve(&spans, &buffer, profile, &tags);
        let mut result = rewrite::apply(&buffer, &intents, self.config.data.mode, profile);
        result.notes = notes;
        result
    }
}
