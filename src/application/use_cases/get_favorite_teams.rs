use std::sync::Arc;

use crate::application::FavoriteTeamRepository;
use crate::domain::{DomainError, FavoriteTeam};

pub struct GetFavoriteTeamsUseCase {
    team_repo: Arc<dyn FavoriteTeamRepository>,
}

impl GetFavoriteTeamsUseCase {
    pub fn new(team_repo: Arc<dyn FavoriteTeamRepository>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self) -> Result<Vec<FavoriteTeam>, DomainError> {
        self.team_repo.get_favorite_teams().await
    }
}
