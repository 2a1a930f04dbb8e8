use async_trait::async_trait;

use crate::domain::{DomainError, FavoriteTeam, LeagueInfo, TeamInfo};

use super::ResultStream;

/// Persistence for the teams a user follows.
#[async_trait]
pub trait FavoriteTeamRepository: Send + Sync {
    async fn add_favorite_team(
        &self,
        team: &TeamInfo,
        league: &LeagueInfo,
    ) -> Result<(), DomainError>;

    async fn remove_favorite_team(&self, team_id: &str) -> Result<(), DomainError>;

    async fn get_favorite_teams(&self) -> Result<Vec<FavoriteTeam>, DomainError>;

    /// Stream of favorite-team snapshots: the current list first, then one
    /// list per change.
    fn observe_favorite_teams(&self) -> ResultStream<Vec<FavoriteTeam>>;

    async fn is_favorite_team(&self, team_id: &str) -> Result<bool, DomainError>;
}
