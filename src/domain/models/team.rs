use serde::{Deserialize, Serialize};

use super::current_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    id: String,
    name: String,
    short_name: Option<String>,
    logo_url: Option<String>,
}

impl TeamInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: None,
            logo_url: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueInfo {
    id: String,
    name: String,
    country: Option<String>,
    logo_url: Option<String>,
}

impl LeagueInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: None,
            logo_url: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }
}

/// A team the user follows, together with the league it was followed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTeam {
    team: TeamInfo,
    league: LeagueInfo,
    added_at: i64,
}

impl FavoriteTeam {
    pub fn new(team: TeamInfo, league: LeagueInfo) -> Self {
        Self {
            team,
            league,
            added_at: current_timestamp(),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(team: TeamInfo, league: LeagueInfo, added_at: i64) -> Self {
        Self {
            team,
            league,
            added_at,
        }
    }

    pub fn id(&self) -> &str {
        self.team.id()
    }

    pub fn team(&self) -> &TeamInfo {
        &self.team
    }

    pub fn league(&self) -> &LeagueInfo {
        &self.league
    }

    pub fn added_at(&self) -> i64 {
        self.added_at
    }

    pub fn summary(&self) -> String {
        match self.league.country() {
            Some(country) => format!(
                "{} ({}, {})",
                self.team.name(),
                self.league.name(),
                country
            ),
            None => format!("{} ({})", self.team.name(), self.league.name()),
        }
    }
}
