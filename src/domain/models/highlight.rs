use serde::{Deserialize, Serialize};

/// A video highlight as returned by a highlights provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    id: String,
    title: String,
    video_url: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    competition: Option<String>,
    /// Provider-formatted publication date, kept verbatim.
    #[serde(default)]
    published_at: Option<String>,
}

impl Highlight {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            video_url: video_url.into(),
            thumbnail_url: None,
            competition: None,
            published_at: None,
        }
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_competition(mut self, competition: impl Into<String>) -> Self {
        self.competition = Some(competition.into());
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn competition(&self) -> Option<&str> {
        self.competition.as_deref()
    }

    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }
}
