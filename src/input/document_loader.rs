//! Resume document loading and saving for the supported file formats

use crate::error::{Result, ScorerError};
use crate::processing::document::ResumeDocument;
use std::path::Path;
use tokio::fs;

pub trait DocumentLoader {
    fn load(&self, path: &Path) -> impl std::future::Future<Output = Result<ResumeDocument>> + Send;

    fn save(
        &self,
        document: &ResumeDocument,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub struct JsonLoader;

impl DocumentLoader for JsonLoader {
    async fn load(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            ScorerError::DocumentParse(format!("Invalid JSON resume '{}': {}", path.display(), e))
        })
    }

    async fn save(&self, document: &ResumeDocument, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

pub struct TomlLoader;

impl DocumentLoader for TomlLoader {
    async fn load(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await?;
        toml::from_str(&content).map_err(|e| {
            ScorerError::DocumentParse(format!("Invalid TOML resume '{}': {}", path.display(), e))
        })
    }

    async fn save(&self, document: &ResumeDocument, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(document).map_err(|e| {
            ScorerError::OutputFormatting(format!("Failed to serialize resume as TOML: {}", e))
        })?;
        fs::write(path, content).await?;
        Ok(())
    }
}
