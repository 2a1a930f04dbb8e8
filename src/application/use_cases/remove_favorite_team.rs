use std::sync::Arc;

use crate::application::FavoriteTeamRepository;
use crate::domain::DomainError;

pub struct RemoveFavoriteTeamUseCase {
    team_repo: Arc<dyn FavoriteTeamRepository>,
}

impl RemoveFavoriteTeamUseCase {
    pub fn new(team_repo: Arc<dyn FavoriteTeamRepository>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, team_id: &str) -> Result<(), DomainError> {
        self.team_repo.remove_favorite_team(team_id).await
    }
}
