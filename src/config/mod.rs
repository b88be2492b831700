pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

use crate::profile::{LanguageProfile, PROFILES};
use crate::rewrite::ScrubMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub version: String,
    /// Language ids to process when discovering files.
    pub languages: Vec<String>,
    pub mode: ScrubMode,
    /// Strip log calls that are already commented out.
    pub remove_commented_logs: bool,
    pub max_file_size_kb: u64,
    /// Tags that mark the next log statement as kept, in addition to the
    /// profile's own tags.
    pub preserve_tags: Vec<String>,
    /// Directory names skipped during discovery.
    pub exclude: Vec<String>,
    pub log_types: LogTypes,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            languages: PROFILES.iter().map(|p| p.id.to_string()).collect(),
            mode: ScrubMode::Delete,
            remove_commented_logs: true,
            max_file_size_kb: 500,
            preserve_tags: vec!["@keep".to_string(), "@preserve".to_string()],
            exclude: vec![
                "node_modules".to_string(),
                "dist".to_string(),
                "out".to_string(),
                "build".to_string(),
                ".git".to_string(),
                "vendor".to_string(),
                "target".to_string(),
            ],
            log_types: LogTypes::default(),
        }
    }
}

/// Selective log-type configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogTypes {
    /// Console methods to detect for javascript/typescript; empty means all.
    pub javascript: Vec<String>,
    /// Detect `debugger` statements.
    pub debugger: bool,
    /// Detect logs in all other languages.
    pub all_other_logs: bool,
}

impl Default for LogTypes {
    fn default() -> Self {
        Self {
            javascript: Vec::new(),
            debugger: true,
            all_other_logs: true,
        }
    }
}

impl LogTypes {
    /// The profile's signature set after applying these toggles.
    pub fn signatures_for(&self, profile: &LanguageProfile) -> Vec<&'static str> {
        match profile.id {
            "javascript" | "typescript" => profile
                .signatures
                .iter()
                .copied()
                .filter(|sig| {
                    if *sig == "debugger" {
                        return self.debugger;
                    }
                    match sig.strip_prefix("console.") {
                        Some(method) => {
                            self.javascript.is_empty()
                                || self.javascript.iter().any(|m| m == method)
                        }
                        None => true,
                    }
                })
                .collect(),
            _ if self.all_other_logs => profile.signatures.to_vec(),
            _ => Vec::new(),
        }
    }
}
