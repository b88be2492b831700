use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;

pub const CONFIG_FILE: &str = ".logscrub.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let config_path = project_root.as_ref().join(CONFIG_FILE);

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        } else {
            ConfigData::default()
        };

        Ok(Self {
            data,
            path: config_path,
        })
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<()> {
        let config_path = project_root.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            let initial = ConfigData::default();
            let content =
                toml::to_string_pretty(&initial).context("failed to serialize initial config")?;
            fs::write(&config_path, content)
                .with_context(|| format!("failed to write {}", config_path.display()))?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data).context("failed to serialize config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_FILE),
        }
    }
}
