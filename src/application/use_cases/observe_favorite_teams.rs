use std::sync::Arc;

use crate::application::{FavoriteTeamRepository, ResultStream};
use crate::domain::FavoriteTeam;

pub struct ObserveFavoriteTeamsUseCase {
    team_repo: Arc<dyn FavoriteTeamRepository>,
}

impl ObserveFavoriteTeamsUseCase {
    pub fn new(team_repo: Arc<dyn FavoriteTeamRepository>) -> Self {
        Self { team_repo }
    }

    pub fn execute(&self) -> ResultStream<Vec<FavoriteTeam>> {
        self.team_repo.observe_favorite_teams()
    }
}
