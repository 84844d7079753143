//! Input manager for loading and saving resume documents

use crate::error::{Result, ScorerError};
use crate::input::document_loader::{DocumentLoader, JsonLoader, TomlLoader};
use crate::input::file_detector::FileType;
use crate::processing::document::ResumeDocument;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, ResumeDocument>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_document(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached resume for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let document = match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Loading JSON resume: {}", path.display());
                JsonLoader.load(path).await?
            }
            FileType::Toml => {
                info!("Loading TOML resume: {}", path.display());
                TomlLoader.load(path).await?
            }
            FileType::Unknown => {
                return Err(ScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    /// Write a resume in the format implied by the extension of `path`.
    ///
    /// Any cached copy for that path is replaced.
    pub async fn save_document(&mut self, document: &ResumeDocument, path: &Path) -> Result<()> {
        match self.detect_file_type(path)? {
            FileType::Json => JsonLoader.save(document, path).await?,
            FileType::Toml => TomlLoader.save(document, path).await?,
            FileType::Unknown => {
                return Err(ScorerError::UnsupportedFormat(format!(
                    "Cannot save resume as: {}",
                    path.display()
                )));
            }
        }
        info!("Saved resume to: {}", path.display());

        if self.enable_cache {
            self.cache
                .insert(path.to_string_lossy().to_string(), document.clone());
        }
        Ok(())
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ScorerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
