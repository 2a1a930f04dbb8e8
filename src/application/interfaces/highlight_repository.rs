use async_trait::async_trait;

use crate::domain::{DomainError, Highlight};

/// Source of video highlights.
#[async_trait]
pub trait HighlightRepository: Send + Sync {
    async fn get_highlights(&self, query: &str) -> Result<Vec<Highlight>, DomainError>;
}
