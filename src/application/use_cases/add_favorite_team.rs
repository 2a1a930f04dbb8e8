use std::sync::Arc;

use crate::application::FavoriteTeamRepository;
use crate::domain::{DomainError, LeagueInfo, TeamInfo};

/// Use case for following a team within a league.
pub struct AddFavoriteTeamUseCase {
    team_repo: Arc<dyn FavoriteTeamRepository>,
}

impl AddFavoriteTeamUseCase {
    pub fn new(team_repo: Arc<dyn FavoriteTeamRepository>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, team: &TeamInfo, league: &LeagueInfo) -> Result<(), DomainError> {
        self.team_repo.add_favorite_team(team, league).await
    }
}
