use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::application::HighlightRepository;
use crate::domain::{DomainError, Highlight};

/// Fixed highlight catalog, searched by case-insensitive substring match
/// against title and competition. A blank query returns everything.
pub struct InMemoryHighlightRepository {
    catalog: Vec<Highlight>,
}

impl InMemoryHighlightRepository {
    pub fn new(catalog: Vec<Highlight>) -> Self {
        Self { catalog }
    }

    /// Load a catalog from a JSON file holding an array of highlights.
    pub fn from_json_file(path: &Path) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Vec<Highlight> = serde_json::from_str(&contents).map_err(|e| {
            DomainError::parse(format!(
                "Failed to parse highlights file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded {} highlights from {}",
            catalog.len(),
            path.display()
        );
        Ok(Self::new(catalog))
    }

    fn matches(highlight: &Highlight, needle: &str) -> bool {
        highlight.title().to_lowercase().contains(needle)
            || highlight
                .competition()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }
}

impl Default for InMemoryHighlightRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl HighlightRepository for InMemoryHighlightRepository {
    async fn get_highlights(&self, query: &str) -> Result<Vec<Highlight>, DomainError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(self.catalog.clone());
        }

        Ok(self
            .catalog
            .iter()
            .filter(|h| Self::matches(h, &needle))
            .cloned()
            .collect())
    }
}
