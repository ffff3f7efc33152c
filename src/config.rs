use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::detector::{FilePatterns, DEFAULT_LICENSE_FILES};

/// Root configuration structure, deserialized from `.license-detectr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory scan settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Controls which file names a directory scan treats as license candidates.
#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
    /// Replaces the built-in pattern set when present.
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    /// Appended after the base set (built-in or `patterns`).
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

impl Config {
    /// Compile the effective file-name pattern set.
    pub fn file_patterns(&self) -> Result<FilePatterns> {
        let base: Vec<&str> = match &self.scan.patterns {
            Some(patterns) => patterns.iter().map(String::as_str).collect(),
            None => DEFAULT_LICENSE_FILES.to_vec(),
        };

        let mut patterns = FilePatterns::new(base)?;
        patterns.extend(&self.scan.extra_patterns)?;

        if patterns.is_empty() {
            bail!("scan.patterns is empty; no file could ever match");
        }
        Ok(patterns)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-detectr/config.toml`
/// 3. `~/.config/license-detectr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-detectr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-detectr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
