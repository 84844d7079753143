//! Configuration management for the ATS scorer

use crate::error::{Result, ScorerError};
use crate::processing::ats_scorer::ScoringOptions;
use crate::processing::keyword_matcher::KeywordScope;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub keyword_scope: KeywordScope,
    /// Cap the skills breakdown at 100 instead of reporting raw coverage.
    pub clamp_skills_breakdown: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_recommendations: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            include_recommendations: true,
            color_output: true,
        }
    }
}

/// Scoring context used when the command line leaves role or industry unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub target_role: String,
    pub industry_focus: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
    Html,
}

impl Config {
    /// Load from `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats-scorer")
            .join("config.toml")
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            keyword_scope: self.scoring.keyword_scope,
            clamp_skills_breakdown: self.scoring.clamp_skills_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.keyword_scope = KeywordScope::Fields;
        config.output.format = OutputFormat::Markdown;
        config.defaults.industry_focus = "Finance".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.scoring_options().keyword_scope, KeywordScope::Fields);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nclamp_skills_breakdown = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.scoring.clamp_skills_breakdown);
        assert_eq!(config.scoring.keyword_scope, KeywordScope::Document);
        assert!(config.output.include_recommendations);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ScorerError::Configuration(_)));
    }
}
