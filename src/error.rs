use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logscrub operations
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("no language profile for file: {path:?}")]
    UnknownExtension { path: PathBuf },

    #[error("file is not valid UTF-8: {path:?}")]
    Encoding { path: PathBuf },

    #[error("file exceeds size limit of {limit_kb} KB: {path:?} ({size_kb} KB)")]
    FileTooLarge {
        path: PathBuf,
        size_kb: u64,
        limit_kb: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for logscrub operations
pub type ScrubResult<T> = Result<T, ScrubError>;
