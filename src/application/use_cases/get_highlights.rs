use std::sync::Arc;

use crate::application::HighlightRepository;
use crate::domain::{DomainError, Highlight};

/// Use case for fetching video highlights matching a free-text query.
pub struct GetHighlightsUseCase {
    highlight_repo: Arc<dyn HighlightRepository>,
}

impl GetHighlightsUseCase {
    pub fn new(highlight_repo: Arc<dyn HighlightRepository>) -> Self {
        Self { highlight_repo }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<Highlight>, DomainError> {
        self.highlight_repo.get_highlights(query).await
    }
}
