use serde::{Deserialize, Serialize};

use super::current_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePlayer {
    id: String,
    name: String,
    team_name: Option<String>,
    position: Option<String>,
    image_url: Option<String>,
    added_at: i64,
}

impl FavoritePlayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_name: None,
            position: None,
            image_url: None,
            added_at: current_timestamp(),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: String,
        name: String,
        team_name: Option<String>,
        position: Option<String>,
        image_url: Option<String>,
        added_at: i64,
    ) -> Self {
        Self {
            id,
            name,
            team_name,
            position,
            image_url,
            added_at,
        }
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref()
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn added_at(&self) -> i64 {
        self.added_at
    }

    /// Copy of `self` carrying an earlier `added_at`, used when an upsert
    /// must keep the original insertion time.
    pub fn with_added_at(mut self, added_at: i64) -> Self {
        self.added_at = added_at;
        self
    }

    pub fn summary(&self) -> String {
        let mut line = self.name.clone();
        if let Some(position) = &self.position {
            line.push_str(&format!(", {}", position));
        }
        if let Some(team) = &self.team_name {
            line.push_str(&format!(" ({})", team));
        }
        line
    }
}
