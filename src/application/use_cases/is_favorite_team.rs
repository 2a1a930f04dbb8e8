use std::sync::Arc;

use crate::application::FavoriteTeamRepository;
use crate::domain::DomainError;

/// Use case for checking whether a team is followed.
pub struct IsFavoriteTeamUseCase {
    team_repo: Arc<dyn FavoriteTeamRepository>,
}

impl IsFavoriteTeamUseCase {
    pub fn new(team_repo: Arc<dyn FavoriteTeamRepository>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, team_id: &str) -> Result<bool, DomainError> {
        self.team_repo.is_favorite_team(team_id).await
    }
}
